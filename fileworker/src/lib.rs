//! # FileWorker - File Operations Library
//!
//! A small, stateless façade over the local file system for reading, writing
//! and copying files, with bounded retry for operations that may fail
//! transiently.
//!
//! ## Overview
//!
//! - Lookups and reads report a missing path as `None`, never as an error
//! - `write`/`try_write` swallow I/O errors and report plain `true`/`false`
//! - `try_copy` propagates copy faults, and never overwrites an existing
//!   destination unless asked to
//! - Every operation rejects an empty or blank path before touching the disk
//!
//! ## Basic Usage
//!
//! ```no_run
//! use fileworker::{read_lines, try_copy, write};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert!(write("a\nb\nc", "f.txt"));
//! assert_eq!(read_lines("f.txt")?, Some(vec!["a".into(), "b".into(), "c".into()]));
//!
//! // Up to two attempts, 100ms apart
//! if try_copy("f.txt", "g.txt", false, 2)? {
//!     println!("copied");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - **error**: Error type for faults that escape an operation
//! - **model**: Retry policy
//! - **delay**: Pluggable wait between retry attempts
//! - **paths**: Path lookups and directory creation
//! - **fs_ops**: Single-shot read, write and copy
//! - **retry**: Retrying write and copy

pub mod error;
pub mod model;
pub mod delay;
pub mod paths;
pub mod fs_ops;
pub mod retry;

// Re-export main types and functions
pub use error::FileWorkerError;
pub use model::{RetryPolicy, DEFAULT_RETRY_DELAY, DEFAULT_TRIES};
pub use delay::{Delay, NoDelay, ThreadDelay};
pub use paths::{get_file_name, get_full_path, get_path, is_blank, mkdir};
pub use fs_ops::{copy_file, read_all, read_lines, write};
pub use retry::{try_copy, try_copy_with, try_write, try_write_with};
