use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use xkb_tools::ToolError;

#[derive(Parser)]
#[command(name = "xkbcfgsort")]
#[command(version, about = "Sort the keys of every section in a .cfg file")]
#[command(long_about = "Sort the keys of every section in a .cfg file\n\n\
    Sections keep their order; keys inside each section are sorted\n\
    case-insensitively. The result is written to <FILE_CFG>.sorted and\n\
    the input file is left untouched:\n  \
    xkbcfgsort layouts.cfg [-v]")]
struct Cli {
    /// File .cfg to sort
    file_cfg: PathBuf,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let out_path = match xkb_tools::sort::sort_file(&cli.file_cfg) {
        Err(err @ ToolError::InvalidPath(_)) => {
            println!("ERROR: {err}");
            process::exit(1);
        }
        other => {
            other.with_context(|| format!("Failed to sort: {}", cli.file_cfg.display()))?
        }
    };

    if cli.verbose {
        eprintln!("Wrote: {}", out_path.display());
    }

    Ok(())
}
