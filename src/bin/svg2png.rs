use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "svg2png")]
#[command(version, about = "Rasterize every SVG in the current directory to PNG")]
#[command(long_about = "Rasterize every SVG in the current directory to PNG\n\n\
    Each *.svg file is rendered to a <name>.png sibling of exactly\n\
    WIDTH x HEIGHT pixels, stretching the source if needed:\n  \
    svg2png 64 32 [-v]")]
struct Cli {
    /// Destination width in pixels
    width: u32,

    /// Destination height in pixels
    height: u32,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dir = std::env::current_dir().context("Failed to resolve the current directory")?;

    if cli.verbose {
        eprintln!("Scanning for SVG files in: {}", dir.display());
    }

    let svg_files = xkb_tools::raster::svg_files(&dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    if cli.verbose {
        eprintln!("Found {} SVG file(s)", svg_files.len());
    }

    for svg_path in &svg_files {
        if cli.verbose {
            eprintln!("Rasterizing: {}", svg_path.display());
        }

        let png_path = xkb_tools::raster::rasterize_file(svg_path, cli.width, cli.height)
            .with_context(|| format!("Failed to rasterize: {}", svg_path.display()))?;

        if cli.verbose {
            eprintln!("  → {}", png_path.display());
        }
    }

    if cli.verbose {
        eprintln!("Done! Rasterized {} file(s)", svg_files.len());
    }

    Ok(())
}
