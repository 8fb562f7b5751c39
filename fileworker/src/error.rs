//! Error types for file operations.
//!
//! `FileWorkerError` is only surfaced where an operation has no other way to
//! report a problem. A missing path is not an error: lookups return `None`,
//! and `write`/`try_write` report failures as `false`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can escape a file operation.
#[derive(Debug, Error)]
pub enum FileWorkerError {
    /// A required path was empty or blank, or an argument was out of range
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Copy source does not exist
    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Copy destination exists and overwrite was not requested
    #[error("Destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    /// Copy source and destination resolve to the same file
    #[error("Source and destination are the same file: {}", path.display())]
    SameFile { path: PathBuf },

    /// Failed to read from a file that exists
    #[error("Failed to read file: {}", path.display())]
    ReadError { path: PathBuf, source: io::Error },

    /// Failed to create or write a file
    #[error("Failed to write file: {}", path.display())]
    WriteError { path: PathBuf, source: io::Error },

    /// Failed to create a directory
    #[error("Failed to create directory: {}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// Failed to turn a path into an absolute one
    #[error("Failed to resolve path: {}", path.display())]
    PathResolutionFailed { path: PathBuf, source: io::Error },
}

impl FileWorkerError {
    /// Extract the OS error code from this error, if available.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::ReadError { source, .. }
            | Self::WriteError { source, .. }
            | Self::DirectoryCreationFailed { source, .. }
            | Self::PathResolutionFailed { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = FileWorkerError::DestinationExists {
            path: PathBuf::from("out/g.txt"),
        };
        assert_eq!(err.to_string(), "Destination already exists: out/g.txt");
    }

    #[test]
    fn test_raw_os_error_from_io_source() {
        let err = FileWorkerError::WriteError {
            path: PathBuf::from("f.txt"),
            source: io::Error::from_raw_os_error(13),
        };
        assert_eq!(err.raw_os_error(), Some(13));

        let err = FileWorkerError::invalid_argument("path is empty");
        assert_eq!(err.raw_os_error(), None);
    }

    #[test]
    fn test_io_error_is_exposed_as_source() {
        use std::error::Error;

        let err = FileWorkerError::ReadError {
            path: PathBuf::from("f.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.source().is_some());
    }
}
