//! Progress reporting while a question is answered

use crate::progress::timer::{ElapsedTimer, format_elapsed};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scout_application::SearchProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner with an elapsed-time prefix, driven by an [`ElapsedTimer`]
pub struct ProgressReporter {
    bar: ProgressBar,
    timer: Mutex<Option<ElapsedTimer>>,
}

impl ProgressReporter {
    /// Start the spinner. Must be called inside a tokio runtime.
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix(format_elapsed(Duration::ZERO));
        bar.set_message("Searching...");

        let ticking = bar.clone();
        let timer = ElapsedTimer::start(move |elapsed| {
            ticking.set_prefix(format_elapsed(elapsed));
            ticking.tick();
        });

        Self {
            bar,
            timer: Mutex::new(Some(timer)),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.dim} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Stop the ticker and return the elapsed time, once.
    fn stop_timer(&self) -> Option<Duration> {
        self.timer
            .lock()
            .ok()
            .and_then(|mut timer| timer.take())
            .map(|timer| timer.stop())
    }
}

impl SearchProgress for ProgressReporter {
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        self.bar
            .set_message(format!("Searching (attempt {}/{})...", attempt, max_attempts));
    }

    fn on_attempt_failed(&self, attempt: usize, reason: &str) {
        self.bar.println(format!(
            "  {} attempt {} failed: {}",
            "x".red(),
            attempt,
            reason
        ));
    }

    fn on_verification_start(&self) {
        self.bar.set_message("Verifying answer...");
    }

    fn on_complete(&self, success: bool) {
        let elapsed = self.stop_timer().map(format_elapsed).unwrap_or_default();
        if success {
            self.bar
                .finish_with_message(format!("{} done in {}", "v".green(), elapsed));
        } else {
            self.bar
                .abandon_with_message(format!("{} failed after {}", "x".red(), elapsed));
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.stop_timer();
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

/// Plain line-per-event progress for non-interactive output
pub struct SimpleProgress;

impl SearchProgress for SimpleProgress {
    fn on_attempt_start(&self, attempt: usize, max_attempts: usize) {
        eprintln!("{} attempt {}/{}", "->".cyan(), attempt, max_attempts);
    }

    fn on_attempt_failed(&self, attempt: usize, reason: &str) {
        eprintln!("  {} attempt {} failed: {}", "x".red(), attempt, reason);
    }

    fn on_verification_start(&self) {
        eprintln!("{} verifying", "->".cyan());
    }
}
