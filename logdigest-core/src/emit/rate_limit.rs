use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Sliding-window limiter: no more than `limit` acquisitions in any `window`.
#[derive(Debug)]
pub struct RateLimiter {
    limit: usize,
    window: Duration,
    starts: VecDeque<Instant>,
}

impl RateLimiter {
    /// A `limit` of zero is treated as one.
    pub fn new(limit: usize, window: Duration) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            window,
            starts: VecDeque::with_capacity(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Waits until another start fits in the window, then records it.
    pub async fn acquire(&mut self) {
        loop {
            let now = Instant::now();
            self.evict(now);

            if self.starts.len() < self.limit {
                self.starts.push_back(now);
                return;
            }

            // Full: the oldest start has to age out of the window first.
            if let Some(oldest) = self.starts.front() {
                sleep_until(*oldest + self.window).await;
            }
        }
    }

    fn evict(&mut self, now: Instant) {
        while let Some(ts) = self.starts.front() {
            if now.duration_since(*ts) >= self.window {
                self.starts.pop_front();
            } else {
                break;
            }
        }
    }
}
