//! # xkb-tools
//!
//! Build and maintenance helpers for the xkb keyboard-layout panel plugin:
//!
//! - [`raster`] rasterizes every flag SVG in a directory to fixed-size PNGs.
//! - [`sort`] rewrites a configuration file with the keys of each section
//!   sorted case-insensitively.
//! - [`convert`] reformats manual page text into `key=value` lines.
//!
//! Each helper is a single forward pass over local files; the tools are
//! independent and share no state.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Sort the keys of every section in layouts.cfg into layouts.cfg.sorted.
//! let sorted = xkb_tools::sort::sort_file(Path::new("layouts.cfg")).unwrap();
//! println!("wrote {}", sorted.display());
//!
//! // Reformat a manual page, appending to layouts.man.cfg.
//! let cfg = xkb_tools::convert::convert_file(Path::new("layouts.man")).unwrap();
//! println!("appended to {}", cfg.display());
//! ```

pub mod convert;
pub mod error;
pub mod paths;
pub mod raster;
pub mod sort;

// Re-export commonly used items
pub use error::{Result, ToolError};
