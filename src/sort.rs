use crate::error::Result;
use crate::paths::{append_suffix, require_file};
use ini::Ini;
use std::path::{Path, PathBuf};

/// Suffix appended to the input filename for the sorted output
const SORTED_SUFFIX: &str = ".sorted";

/// Sort the keys of every section in a configuration document
///
/// Sections keep their original order; within each section the (key, value)
/// pairs are reordered by case-insensitive comparison of the key. Keys and
/// values themselves are never modified. The sort is stable, so equal keys
/// (impossible with well-formed input, where keys are unique per section)
/// would keep their original relative order.
pub fn sort_sections(document: &Ini) -> Ini {
    let mut sorted = Ini::new();
    for (section, properties) in document.iter() {
        // Create the section up front so one without keys still gets its
        // header in the output.
        sorted
            .entry(section.map(str::to_owned))
            .or_insert_with(ini::Properties::new);

        let mut pairs: Vec<(&str, &str)> = properties.iter().collect();
        pairs.sort_by_key(|(key, _)| key.to_lowercase());

        for (key, value) in pairs {
            sorted.set_to(section, key.to_string(), value.to_string());
        }
    }
    sorted
}

/// Sort a configuration file on disk
///
/// Fails with [`ToolError::InvalidPath`](crate::ToolError::InvalidPath) if
/// `cfg_path` is not a regular file. Otherwise the whole document is parsed,
/// its sections are key-sorted via [`sort_sections`], and the result is
/// written to `<cfg_path>.sorted`. The input file is never modified.
///
/// # Arguments
/// * `cfg_path` - Path to the configuration file to sort
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the `.sorted` file that was written
/// * `Err(ToolError)` - Invalid path, parse failure or write failure
pub fn sort_file(cfg_path: &Path) -> Result<PathBuf> {
    require_file(cfg_path)?;

    let document = Ini::load_from_file(cfg_path)?;
    let sorted = sort_sections(&document);

    let out_path = append_suffix(cfg_path, SORTED_SUFFIX);
    sorted.write_to_file(&out_path)?;
    Ok(out_path)
}
