//! Retry configuration shared by the retrying operations.

use std::time::Duration;

/// Delay between two attempts when none is configured.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Attempt count used when the caller does not give one.
pub const DEFAULT_TRIES: u32 = 1;

/// How many times an operation is attempted and how long to wait in between.
///
/// A policy with `tries == 0` is valid to construct but never runs: the
/// retrying operations return failure without touching the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts
    pub tries: u32,

    /// Fixed wait between consecutive attempts
    pub delay: Duration,
}

impl RetryPolicy {
    /// Policy with `tries` attempts and the default delay.
    pub fn new(tries: u32) -> Self {
        RetryPolicy {
            tries,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Replace the inter-attempt delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns true if this policy allows at least one attempt.
    pub fn is_runnable(&self) -> bool {
        self.tries >= 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new(DEFAULT_TRIES)
    }
}
