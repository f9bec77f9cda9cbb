use rxcoord::cli::{parse_args, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    if let Err(e) = result {
        eprintln!("render_diagram: {}", e);
        std::process::exit(1);
    }
}
