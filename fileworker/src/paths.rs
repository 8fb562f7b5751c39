//! Path introspection and directory creation.
//!
//! Lookups only report on regular files that exist at call time. Nothing is
//! cached: every call goes back to the file system.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use crate::error::FileWorkerError;

/// Returns true if `path` is empty or consists only of whitespace.
///
/// Blank paths are rejected by every operation before any file-system access.
pub fn is_blank(path: &Path) -> bool {
    let raw = path.as_os_str();
    raw.is_empty() || raw.to_str().is_some_and(|s| s.trim().is_empty())
}

/// Returns true if `path` names an existing regular file.
pub(crate) fn is_existing_file(path: &Path) -> bool {
    !is_blank(path) && path.is_file()
}

/// Resolve `path` against the current directory and drop `.`/`..` segments.
///
/// Resolution is lexical: symlinks are left as the caller named them.
pub(crate) fn absolute(path: &Path) -> io::Result<PathBuf> {
    let joined = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root is a no-op
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Absolute path of an existing file, or `None` if it does not exist.
pub fn get_full_path<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let path = path.as_ref();
    if !is_existing_file(path) {
        return None;
    }
    absolute(path).ok()
}

/// File name (with extension) of an existing file, or `None`.
pub fn get_file_name<P: AsRef<Path>>(path: P) -> Option<String> {
    let full = get_full_path(path)?;
    full.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Absolute path of the directory containing an existing file, or `None`.
pub fn get_path<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    let full = get_full_path(path)?;
    full.parent().map(Path::to_path_buf)
}

/// Create the directory `name` (and any missing parents) and return its
/// absolute path.
///
/// Calling this on a directory that already exists is not an error; the same
/// absolute path is returned.
///
/// # Errors
/// - `InvalidArgument` if `name` is blank
/// - `DirectoryCreationFailed` if the directory cannot be created, e.g. a
///   regular file already occupies the path
/// - `PathResolutionFailed` if the current directory cannot be determined
pub fn mkdir<P: AsRef<Path>>(name: P) -> Result<PathBuf, FileWorkerError> {
    let name = name.as_ref();
    if is_blank(name) {
        return Err(FileWorkerError::invalid_argument("directory name is empty"));
    }

    if !name.is_dir() {
        fs::create_dir_all(name).map_err(|e| FileWorkerError::DirectoryCreationFailed {
            path: name.to_path_buf(),
            source: e,
        })?;
        debug!(path = %name.display(), "created directory");
    }

    absolute(name).map_err(|e| FileWorkerError::PathResolutionFailed {
        path: name.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(Path::new("")));
        assert!(is_blank(Path::new("   ")));
        assert!(!is_blank(Path::new("f.txt")));
        assert!(!is_blank(Path::new(" f.txt")));
    }

    #[test]
    fn test_absolute_normalizes_dot_segments() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = absolute(temp_dir.path()).expect("Failed to resolve temp dir");
        let messy = base.join("a").join(".").join("b").join("..").join("c.txt");

        let resolved = absolute(&messy).expect("Failed to resolve path");
        assert_eq!(resolved, base.join("a").join("c.txt"));
    }

    #[test]
    fn test_absolute_of_relative_path_is_under_cwd() {
        let cwd = std::env::current_dir().expect("Failed to read cwd");
        let resolved = absolute(Path::new("some/file.txt")).expect("Failed to resolve path");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/file.txt"));
        assert!(resolved.starts_with(absolute(&cwd).expect("Failed to resolve cwd")));
    }

    #[test]
    fn test_get_full_path_existing_file() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("somefile.txt");
        fs::write(&file, "data").expect("Failed to write file");

        let full = get_full_path(&file).expect("Expected a full path");
        assert!(full.is_absolute());
        assert_eq!(full, absolute(&file).expect("Failed to resolve path"));
    }

    #[test]
    fn test_lookups_on_missing_file_return_none() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = temp_dir.path().join("somefile2.txt");

        assert_eq!(get_full_path(&missing), None);
        assert_eq!(get_file_name(&missing), None);
        assert_eq!(get_path(&missing), None);
    }

    #[test]
    fn test_lookups_on_blank_path_return_none() {
        assert_eq!(get_full_path(""), None);
        assert_eq!(get_file_name(" "), None);
        assert_eq!(get_path(""), None);
    }

    #[test]
    fn test_lookups_on_directory_return_none() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        assert_eq!(get_full_path(temp_dir.path()), None);
        assert_eq!(get_file_name(temp_dir.path()), None);
        assert_eq!(get_path(temp_dir.path()), None);
    }

    #[test]
    fn test_get_file_name_keeps_extension() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("somefile.txt");
        fs::write(&file, "data").expect("Failed to write file");

        assert_eq!(get_file_name(&file).as_deref(), Some("somefile.txt"));
    }

    #[test]
    fn test_get_path_returns_containing_directory() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("somefile.txt");
        fs::write(&file, "data").expect("Failed to write file");

        let dir = get_path(&file).expect("Expected a directory");
        assert_eq!(dir, absolute(temp_dir.path()).expect("Failed to resolve temp dir"));
    }

    #[test]
    fn test_mkdir_creates_nested_directories() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = temp_dir.path().join("a").join("b").join("somefolder");

        let created = mkdir(&target).expect("Failed to create directory");
        assert!(target.is_dir());
        assert_eq!(created, absolute(&target).expect("Failed to resolve path"));
    }

    #[test]
    fn test_mkdir_is_idempotent() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = temp_dir.path().join("somefolder");

        let first = mkdir(&target).expect("First mkdir failed");
        let second = mkdir(&target).expect("Second mkdir failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_mkdir_rejects_blank_name() {
        let result = mkdir("");
        assert!(matches!(result, Err(FileWorkerError::InvalidArgument { .. })));
    }

    #[test]
    fn test_mkdir_over_existing_file_fails() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = temp_dir.path().join("taken");
        fs::write(&file, "data").expect("Failed to write file");

        let result = mkdir(&file);
        assert!(matches!(
            result,
            Err(FileWorkerError::DirectoryCreationFailed { .. })
        ));
    }
}
