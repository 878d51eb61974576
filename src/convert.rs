use crate::error::Result;
use crate::paths::{append_suffix, require_file};
use regex::Regex;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Suffix appended to the input filename for the converted output
const CFG_SUFFIX: &str = ".cfg";

/// A manual page line splits into `key=value` when it starts with a token of
/// at least two non-whitespace characters followed by three or more
/// whitespace characters.
static MAN_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(\S\S+)\s\s\s+(.+)").unwrap());

/// Reformat a single manual page line
///
/// The line is stripped of surrounding whitespace first. If it matches the
/// token/description pattern the result is `token=description`; otherwise
/// the stripped line is returned unchanged.
pub fn convert_line(line: &str) -> String {
    let line = line.trim();
    match MAN_LINE.captures(line) {
        Some(caps) => format!("{}={}", &caps[1], &caps[2]),
        None => line.to_string(),
    }
}

/// Convert a manual page file to `key=value` configuration lines
///
/// Fails with [`ToolError::InvalidPath`](crate::ToolError::InvalidPath) if
/// `man_path` is not a regular file. The output file `<man_path>.cfg` is
/// opened in append mode, so running the converter twice on the same input
/// accumulates the output twice. That matches the tool's historical,
/// observable behavior and is kept on purpose.
///
/// Every input line produces exactly one output line, written immediately.
///
/// # Arguments
/// * `man_path` - Path to the manual page text file
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the `.cfg` file that was appended to
/// * `Err(ToolError)` - Invalid path or IO failure
pub fn convert_file(man_path: &Path) -> Result<PathBuf> {
    require_file(man_path)?;

    let out_path = append_suffix(man_path, CFG_SUFFIX);
    let mut out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&out_path)?;

    let reader = BufReader::new(File::open(man_path)?);
    for line in reader.lines() {
        let line = line?;
        writeln!(out, "{}", convert_line(&line))?;
    }
    Ok(out_path)
}
