//! Fixed-interval pacing of upstream calls.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Default spacing between two upstream calls.
pub const DEFAULT_PACING: Duration = Duration::from_millis(600);

/// Shared limiter that keeps upstream calls at least `interval` apart.
///
/// One `Pacer` guards the upstream resource for a whole pipeline run, so
/// running several fetches concurrently does not multiply the request rate.
/// Waiters are served one at a time in lock acquisition order.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the next permitted call slot.
    ///
    /// Every call sleeps before it goes out, so the first one also waits a
    /// full interval.
    pub async fn wait(&self) {
        let mut next_slot = self.next_slot.lock().await;
        let target = next_slot.unwrap_or_else(|| Instant::now() + self.interval);
        if target > Instant::now() {
            sleep_until(target).await;
        }
        *next_slot = Some(Instant::now() + self.interval);
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_PACING)
    }
}
