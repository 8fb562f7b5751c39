//! Waiting between retry attempts.
//!
//! The retry loop never sleeps directly. It asks a `Delay` to pause, which
//! lets callers swap the blocking sleep for something that returns at once
//! (tests, or callers that already throttle elsewhere).

use std::thread;
use std::time::Duration;

/// Something that can wait for a given duration between attempts.
///
/// Called synchronously from the retry loop, at most `tries - 1` times per
/// operation and never after the final attempt.
pub trait Delay: Send {
    /// Wait for `duration` before the next attempt.
    fn pause(&self, duration: Duration);
}

/// Blocks the calling thread with `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&self, _duration: Duration) {}
}
