//! Retry policy for answer acquisition.
//!
//! [`RetryPolicy`] bounds how often the search model is asked before the
//! request fails. It applies to the search call only; the verification pass
//! is a single attempt.

use std::time::Duration;

/// Attempt bound and fixed delay between search attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of search attempts (a value of 0 still makes one).
    pub max_retries: usize,
    /// Fixed delay between attempts. Never applied after the last attempt.
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    /// Number of attempts actually made.
    pub fn max_attempts(&self) -> usize {
        self.max_retries.max(1)
    }

    // ==================== Builder Methods ====================

    pub fn with_max_retries(mut self, max: usize) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}
