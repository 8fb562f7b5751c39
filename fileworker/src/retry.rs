//! Bounded retry around the single-shot operations.
//!
//! Both retrying operations share one loop: run an attempt, stop on the
//! first success, otherwise wait the policy's fixed delay and go again until
//! the attempt budget is spent. They differ in how faults are treated:
//! - `try_write` retries `write`, which already turns every I/O error into
//!   `false`, so nothing ever escapes.
//! - `try_copy` lets a faulting copy attempt end the loop and hands the error
//!   to the caller.

use std::convert::Infallible;
use std::path::Path;
use tracing::{debug, warn};
use crate::delay::{Delay, ThreadDelay};
use crate::error::FileWorkerError;
use crate::fs_ops;
use crate::model::RetryPolicy;
use crate::paths;

/// Run `attempt` until it reports success or `policy.tries` attempts have
/// been made. An `Err` from an attempt ends the loop immediately.
///
/// The delay is only paused between attempts, never after the last one.
fn run_attempts<E>(
    operation: &str,
    policy: &RetryPolicy,
    delay: &dyn Delay,
    mut attempt: impl FnMut() -> Result<bool, E>,
) -> Result<bool, E> {
    for n in 1..=policy.tries {
        if attempt()? {
            debug!(operation, attempt = n, "attempt succeeded");
            return Ok(true);
        }

        debug!(operation, attempt = n, tries = policy.tries, "attempt failed");
        if n < policy.tries {
            delay.pause(policy.delay);
        }
    }

    warn!(operation, tries = policy.tries, "all attempts failed");
    Ok(false)
}

/// Write `text` to `path`, retrying up to `tries` times with the default
/// 100ms delay between attempts.
///
/// Returns false without touching the file system if `path` is blank or
/// `tries` is zero.
pub fn try_write<P: AsRef<Path>>(text: &str, path: P, tries: u32) -> bool {
    try_write_with(text, path, &RetryPolicy::new(tries), &ThreadDelay)
}

/// [`try_write`] with an explicit policy and delay.
pub fn try_write_with<P: AsRef<Path>>(
    text: &str,
    path: P,
    policy: &RetryPolicy,
    delay: &dyn Delay,
) -> bool {
    let path = path.as_ref();
    if paths::is_blank(path) || !policy.is_runnable() {
        return false;
    }

    let result = run_attempts::<Infallible>("write", policy, delay, || {
        Ok(fs_ops::write(text, path))
    });
    match result {
        Ok(written) => written,
        Err(never) => match never {},
    }
}

/// Copy `from` to `to`, retrying up to `tries` times with the default 100ms
/// delay between attempts.
///
/// An attempt counts as successful when `to` exists after it.
///
/// # Returns
/// `Ok(false)` without touching the file system if either path is blank or
/// `tries` is zero.
///
/// # Errors
/// Any error from the underlying copy (see [`fs_ops::copy_file`]) is
/// returned as-is and stops further attempts. In particular, an existing
/// `to` with `overwrite == false` yields `DestinationExists` and `to` is left
/// untouched.
pub fn try_copy<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    to: Q,
    overwrite: bool,
    tries: u32,
) -> Result<bool, FileWorkerError> {
    try_copy_with(from, to, overwrite, &RetryPolicy::new(tries), &ThreadDelay)
}

/// [`try_copy`] with an explicit policy and delay.
pub fn try_copy_with<P: AsRef<Path>, Q: AsRef<Path>>(
    from: P,
    to: Q,
    overwrite: bool,
    policy: &RetryPolicy,
    delay: &dyn Delay,
) -> Result<bool, FileWorkerError> {
    let from = from.as_ref();
    let to = to.as_ref();
    if paths::is_blank(from) || paths::is_blank(to) || !policy.is_runnable() {
        return Ok(false);
    }

    run_attempts::<FileWorkerError>("copy", policy, delay, || {
        fs_ops::copy_file(from, to, overwrite)?;
        Ok(to.exists())
    })
}
