use crate::error::{Result, ToolError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of the vector image files the rasterizer consumes
const SVG_EXTENSION: &str = "svg";

/// Enumerate the SVG files directly inside a directory
///
/// Only regular files with an `svg` extension are returned; subdirectories
/// are not descended into. The list is sorted so repeated runs process
/// files in a deterministic order.
///
/// # Arguments
/// * `dir` - Directory to scan
///
/// # Returns
/// * `Ok(Vec<PathBuf>)` - Matching files, possibly empty
/// * `Err(ToolError)` - If the directory cannot be read
pub fn svg_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(SVG_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Rasterize a single SVG file to a PNG of exactly `width` x `height` pixels
///
/// The SVG is parsed at its intrinsic size and rendered through a
/// non-uniform scale transform, so the output always has the requested
/// dimensions even when that distorts the source aspect ratio. The PNG is
/// written next to the source with the extension swapped (`us.svg` becomes
/// `us.png`).
///
/// # Arguments
/// * `svg_path` - Path to the SVG file
/// * `width` - Output width in pixels
/// * `height` - Output height in pixels
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the PNG that was written
/// * `Err(ToolError)` - On read, parse, render or encode failure; a zero
///   dimension fails at pixmap allocation
pub fn rasterize_file(svg_path: &Path, width: u32, height: u32) -> Result<PathBuf> {
    let data = fs::read(svg_path)?;
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options)?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(ToolError::InvalidPixmapSize { width, height })?;

    // Scale each axis independently to fill the pixmap exactly.
    let scale_x = width as f32 / tree.size.width() as f32;
    let scale_y = height as f32 / tree.size.height() as f32;
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    resvg::render(&tree, usvg::FitTo::Original, transform, pixmap.as_mut())
        .ok_or_else(|| ToolError::Render(svg_path.to_path_buf()))?;

    let png_path = svg_path.with_extension("png");
    pixmap.save_png(&png_path)?;
    Ok(png_path)
}

/// Rasterize every SVG file in a directory
///
/// Returns the paths of the PNG files written, in processing order. An
/// empty directory is not an error; the result is simply empty.
pub fn rasterize_dir(dir: &Path, width: u32, height: u32) -> Result<Vec<PathBuf>> {
    let mut outputs = Vec::new();
    for svg_path in svg_files(dir)? {
        outputs.push(rasterize_file(&svg_path, width, height)?);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10x20 red rectangle, deliberately not the target aspect ratio
    const SAMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="#ff0000"/></svg>"##;

    #[test]
    fn test_svg_files_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("us.svg"), SAMPLE_SVG).unwrap();
        fs::write(dir.path().join("de.svg"), SAMPLE_SVG).unwrap();
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let files = svg_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["de.svg", "us.svg"]);
    }

    #[test]
    fn test_svg_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(svg_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_rasterize_file_exact_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, SAMPLE_SVG).unwrap();

        let png_path = rasterize_file(&svg_path, 64, 32).unwrap();
        assert_eq!(png_path, dir.path().join("icon.png"));

        let pixmap = tiny_skia::Pixmap::load_png(&png_path).unwrap();
        assert_eq!(pixmap.width(), 64);
        assert_eq!(pixmap.height(), 32);
    }

    #[test]
    fn test_rasterize_file_fills_target() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("flag.svg");
        fs::write(&svg_path, SAMPLE_SVG).unwrap();

        let png_path = rasterize_file(&svg_path, 8, 8).unwrap();
        let pixmap = tiny_skia::Pixmap::load_png(&png_path).unwrap();

        // The source rect covers its whole canvas, so the stretched render
        // must paint every corner.
        let corner = pixmap.pixel(7, 7).unwrap();
        assert_eq!(corner.alpha(), 255);
        assert_eq!(corner.red(), 255);
    }

    #[test]
    fn test_rasterize_file_zero_dimension_fails() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("icon.svg");
        fs::write(&svg_path, SAMPLE_SVG).unwrap();

        assert!(matches!(
            rasterize_file(&svg_path, 0, 32),
            Err(ToolError::InvalidPixmapSize { .. })
        ));
        assert!(!dir.path().join("icon.png").exists());
    }

    #[test]
    fn test_rasterize_dir_converts_every_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("us.svg"), SAMPLE_SVG).unwrap();
        fs::write(dir.path().join("fr.svg"), SAMPLE_SVG).unwrap();

        let outputs = rasterize_dir(dir.path(), 16, 16).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(dir.path().join("us.png").is_file());
        assert!(dir.path().join("fr.png").is_file());
    }

    #[test]
    fn test_rasterize_dir_empty_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(rasterize_dir(dir.path(), 16, 16).unwrap().is_empty());
    }

    #[test]
    fn test_rasterize_file_invalid_svg_fails() {
        let dir = tempfile::tempdir().unwrap();
        let svg_path = dir.path().join("broken.svg");
        fs::write(&svg_path, "definitely not svg").unwrap();

        assert!(matches!(
            rasterize_file(&svg_path, 16, 16),
            Err(ToolError::Svg(_))
        ));
    }
}
