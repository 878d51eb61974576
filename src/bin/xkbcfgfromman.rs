use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use xkb_tools::ToolError;

#[derive(Parser)]
#[command(name = "xkbcfgfromman")]
#[command(version, about = "Convert a manual page file to .cfg key=value lines")]
#[command(long_about = "Convert a manual page file to .cfg key=value lines\n\n\
    Lines of the form 'token   description' (three or more spaces) become\n\
    'token=description'; other lines pass through unchanged. Output is\n\
    APPENDED to <FILE_MAN>.cfg, so repeated runs accumulate:\n  \
    xkbcfgfromman layouts.man [-v]")]
struct Cli {
    /// File .man to convert to .cfg
    file_man: PathBuf,

    /// Verbose output for debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let out_path = match xkb_tools::convert::convert_file(&cli.file_man) {
        Err(err @ ToolError::InvalidPath(_)) => {
            println!("ERROR: {err}");
            process::exit(1);
        }
        other => {
            other.with_context(|| format!("Failed to convert: {}", cli.file_man.display()))?
        }
    };

    if cli.verbose {
        eprintln!("Appended to: {}", out_path.display());
    }

    Ok(())
}
