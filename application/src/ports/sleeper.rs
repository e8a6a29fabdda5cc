//! Delay port
//!
//! The retry controller waits between attempts through [`Sleeper`] so tests
//! can observe the delays without actually sleeping.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current request for a duration.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
