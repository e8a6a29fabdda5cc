//! Request-scoped elapsed-time ticker

use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Interval between elapsed-time updates.
pub const TICK: Duration = Duration::from_millis(100);

/// Calls a callback with the elapsed time every [`TICK`] until stopped.
///
/// The ticker is a spawned tokio task owned by this value; stopping or
/// dropping the timer cancels it. Must be created inside a tokio runtime.
pub struct ElapsedTimer {
    started: Instant,
    token: CancellationToken,
}

impl ElapsedTimer {
    pub fn start<F>(on_tick: F) -> Self
    where
        F: Fn(Duration) + Send + 'static,
    {
        let started = Instant::now();
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => on_tick(started.elapsed()),
                }
            }
        });

        Self { started, token }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Cancel the ticker and return the final elapsed time.
    pub fn stop(&self) -> Duration {
        self.token.cancel();
        self.elapsed()
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ElapsedTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// `12.3s`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}s", elapsed.as_secs_f64())
}
