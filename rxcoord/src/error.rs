use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("svg parse error: {0}")]
    Svg(String),
    #[error("invalid export scale {0}")]
    Scale(f32),
    #[error("canvas {width}x{height} cannot be allocated")]
    Canvas { width: u32, height: u32 },
    #[error("png encode error: {0}")]
    Encode(String),
    #[error("no render target: {0}")]
    MissingTarget(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
