//! Argument handling and rendering for the `render_diagram` binary.

use std::path::{Path, PathBuf};

use crate::export::{write_png, PngOptions};
use crate::{validate_layout, Diagram, DiagramSettings, ExportError, Layout};

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub settings: DiagramSettings,
    pub layout: Option<PathBuf>,
    pub scale: f32,
    pub out: Option<PathBuf>,
}

impl Default for Args {
    fn default() -> Self {
        Self { settings: DiagramSettings::default(), layout: None, scale: 1.0, out: None }
    }
}

/// Parses `--k=v` flags; the program name must already be stripped.
pub fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
    let mut args = Args::default();
    for a in argv {
        if a == "--exo" { args.settings.exothermic = true; }
        else if a == "--endo" { args.settings.exothermic = false; }
        else if a == "--catalyst" { args.settings.catalyst_overlay = true; }
        else if a == "--heat" { args.settings.heat_overlay = true; }
        else if let Some(v) = a.strip_prefix("--barrier=") {
            args.settings.barrier = v.parse().map_err(|_| format!("bad barrier '{}'", v))?;
        }
        else if let Some(v) = a.strip_prefix("--scale=") {
            args.scale = v.parse().map_err(|_| format!("bad scale '{}'", v))?;
        }
        else if let Some(v) = a.strip_prefix("--layout=") { args.layout = Some(PathBuf::from(v)); }
        else if let Some(v) = a.strip_prefix("--out=") { args.out = Some(PathBuf::from(v)); }
        else { return Err(format!("unknown argument '{}'", a)); }
    }
    Ok(args)
}

pub fn load_layout(path: &Path) -> Result<Layout, String> {
    let text = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let layout: Layout = serde_json::from_str(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
    validate_layout(&layout).map_err(|(code, msg)| format!("{}: {} ({})", path.display(), msg, code))?;
    Ok(layout)
}

/// Renders to `args.out`, picking SVG or PNG from the extension. Returns the written path.
pub fn run(args: Args) -> Result<PathBuf, String> {
    let layout = match &args.layout {
        Some(p) => load_layout(p)?,
        None => Layout::default(),
    };
    let mut diagram = Diagram::with_layout(layout).map_err(|(code, msg)| format!("{} ({})", msg, code))?;
    diagram.apply(args.settings);

    let out = args
        .out
        .ok_or_else(|| ExportError::MissingTarget("pass --out=<file.svg|file.png>".into()).to_string())?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("svg") => std::fs::write(&out, diagram.to_svg()).map_err(|e| format!("{}: {}", out.display(), e))?,
        Some("png") => {
            let opts = PngOptions { scale: args.scale, ..Default::default() };
            write_png(&out, &diagram.to_svg(), &opts).map_err(|e| e.to_string())?
        }
        _ => return Err(format!("unsupported output '{}'", out.display())),
    }
    log::info!("wrote {}", out.display());
    Ok(out)
}
