//! Single-shot filesystem operations.
//!
//! This module provides the operations that touch file contents:
//! - Reading a file whole or as lines
//! - Writing text to a file, reporting failure as `false`
//! - Copying a file, propagating every failure to the caller
//!
//! Retrying wrappers live in `retry`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;
use crate::error::FileWorkerError;
use crate::paths;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a file as text.
///
/// A leading UTF-8 byte order mark is dropped and invalid UTF-8 sequences
/// are replaced with U+FFFD, so decoding never fails.
///
/// # Returns
/// `Ok(None)` if `path` is blank or does not name an existing file.
///
/// # Errors
/// Returns `ReadError` if the file exists but cannot be read.
pub fn read_all<P: AsRef<Path>>(path: P) -> Result<Option<String>, FileWorkerError> {
    let path = path.as_ref();
    if !paths::is_existing_file(path) {
        return Ok(None);
    }

    match fs::read(path) {
        Ok(bytes) => Ok(Some(decode_text(&bytes))),
        // Removed between the existence check and the read
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(FileWorkerError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Read a file and split it into lines.
///
/// `\r\n`, `\n` and a bare `\r` each terminate a line, and a trailing
/// terminator does not produce an extra empty line.
///
/// # Errors
/// Same as [`read_all`].
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, FileWorkerError> {
    let text = read_all(path)?;
    Ok(text.map(|text| split_lines(&text)))
}

fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(rest[..end].to_owned());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }
    lines
}

/// Write `text` to `path`, replacing any existing content.
///
/// Never fails loudly: a blank path or any I/O error (missing parent
/// directory, permissions, full disk) yields `false`.
pub fn write<P: AsRef<Path>>(text: &str, path: P) -> bool {
    let path = path.as_ref();
    if paths::is_blank(path) {
        return false;
    }

    match write_text(text, path) {
        Ok(()) => true,
        Err(e) => {
            debug!(path = %path.display(), error = %e, os_error = ?e.raw_os_error(), "write failed");
            false
        }
    }
}

fn write_text(text: &str, path: &Path) -> Result<(), FileWorkerError> {
    let to_write_error = |e| FileWorkerError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };

    let mut file = fs::File::create(path).map_err(to_write_error)?;
    file.write_all(text.as_bytes()).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;
    Ok(())
}

/// Copy a file from `src` to `dst`, preserving its modification time.
///
/// With `overwrite == false` the destination is opened with create-new
/// semantics, so an existing destination is never touched.
///
/// # Returns
/// Number of bytes copied
///
/// # Errors
/// - `InvalidArgument` if `dst` is blank
/// - `SourceNotFound` if `src` is not an existing file
/// - `DestinationExists` if `dst` exists and `overwrite` is false
/// - `SameFile` if `overwrite` is true and both paths name the same file
/// - `ReadError`/`WriteError` for any other I/O failure
pub fn copy_file(src: &Path, dst: &Path, overwrite: bool) -> Result<u64, FileWorkerError> {
    if paths::is_blank(dst) {
        return Err(FileWorkerError::invalid_argument("destination path is empty"));
    }
    if !paths::is_existing_file(src) {
        return Err(FileWorkerError::SourceNotFound {
            path: src.to_path_buf(),
        });
    }

    if overwrite && is_same_file(src, dst) {
        return Err(FileWorkerError::SameFile {
            path: dst.to_path_buf(),
        });
    }

    let mut src_file = fs::File::open(src).map_err(|e| FileWorkerError::ReadError {
        path: src.to_path_buf(),
        source: e,
    })?;
    let src_mtime = src_file.metadata().and_then(|m| m.modified()).ok();

    let mut options = fs::OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let created = !overwrite || !dst.exists();
    let mut dst_file = options.open(dst).map_err(|e| {
        if !overwrite && e.kind() == io::ErrorKind::AlreadyExists {
            FileWorkerError::DestinationExists {
                path: dst.to_path_buf(),
            }
        } else {
            FileWorkerError::WriteError {
                path: dst.to_path_buf(),
                source: e,
            }
        }
    })?;

    let copied = io::copy(&mut src_file, &mut dst_file);
    drop(dst_file);

    let bytes_copied = copied.map_err(|e| {
        // Leave no partial file behind that a later attempt would trip over
        if created {
            let _ = fs::remove_file(dst);
        }

        if e.kind() == io::ErrorKind::PermissionDenied {
            FileWorkerError::WriteError {
                path: dst.to_path_buf(),
                source: e,
            }
        } else {
            FileWorkerError::ReadError {
                path: src.to_path_buf(),
                source: e,
            }
        }
    })?;

    // Best effort; the copy itself already succeeded
    if let Some(mtime) = src_mtime {
        let _ = filetime::set_file_mtime(dst, filetime::FileTime::from_system_time(mtime));
    }

    debug!(from = %src.display(), to = %dst.display(), bytes = bytes_copied, "copied file");
    Ok(bytes_copied)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
