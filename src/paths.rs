use crate::error::{Result, ToolError};
use std::path::{Path, PathBuf};

/// Check that a path references an existing regular file
///
/// Directories, missing paths and special files are all rejected with
/// [`ToolError::InvalidPath`], which binaries turn into the user-facing
/// `ERROR: The path ... is not valid` message and exit status 1.
pub fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ToolError::InvalidPath(path.to_path_buf()))
    }
}

/// Append a suffix to the full filename of a path
///
/// Unlike [`Path::with_extension`], the existing extension is kept:
/// `layouts.cfg` + `.sorted` becomes `layouts.cfg.sorted`.
pub fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_append_suffix_keeps_extension() {
        let path = Path::new("dir/layouts.cfg");
        assert_eq!(
            append_suffix(path, ".sorted"),
            PathBuf::from("dir/layouts.cfg.sorted")
        );
    }

    #[test]
    fn test_append_suffix_without_extension() {
        let path = Path::new("README");
        assert_eq!(append_suffix(path, ".cfg"), PathBuf::from("README.cfg"));
    }

    #[test]
    fn test_require_file_accepts_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "x").unwrap();
        assert!(require_file(&file).is_ok());
    }

    #[test]
    fn test_require_file_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match require_file(&missing) {
            Err(ToolError::InvalidPath(path)) => assert_eq!(path, missing),
            other => panic!("Expected InvalidPath, got {:?}", other),
        }
    }

    #[test]
    fn test_require_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            require_file(dir.path()),
            Err(ToolError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_invalid_path_message() {
        let err = ToolError::InvalidPath(PathBuf::from("/tmp/nope"));
        assert_eq!(err.to_string(), "The path /tmp/nope is not valid");
    }
}
