use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("The path {} is not valid", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] usvg::Error),

    #[error("Cannot allocate a {width}x{height} pixmap")]
    InvalidPixmapSize { width: u32, height: u32 },

    #[error("Failed to render {}", .0.display())]
    Render(PathBuf),

    #[error("Failed to encode PNG: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error("Failed to parse configuration file: {0}")]
    Ini(#[from] ini::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ToolError>;
