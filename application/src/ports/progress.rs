//! Progress notification port
//!
//! Defines the interface for reporting progress while a question is answered.

/// Callback for progress updates during answer acquisition
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, logs, etc.)
pub trait SearchProgress: Send + Sync {
    /// Called before each search attempt (1-based)
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize);

    /// Called when an attempt produced no usable answer
    fn on_attempt_failed(&self, attempt: usize, reason: &str);

    /// Called when the verification pass starts (accurate mode only)
    fn on_verification_start(&self) {}

    /// Called once when the request finishes
    fn on_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSearchProgress;

impl SearchProgress for NoSearchProgress {
    fn on_attempt_start(&self, _attempt: usize, _max_attempts: usize) {}
    fn on_attempt_failed(&self, _attempt: usize, _reason: &str) {}
}
