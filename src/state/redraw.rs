//! Redraw request coalescing.

use std::time::{Duration, Instant};

/// Default minimum interval between throttled redraws.
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Drops redraw requests that arrive within `interval` of the last one let
/// through. Dropped requests are not queued.
#[derive(Debug, Clone)]
pub struct RedrawThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for RedrawThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_INTERVAL)
    }
}

impl RedrawThrottle {
    /// Create a throttle with the given minimum interval.
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Returns true if a redraw should happen at `now`.
    pub fn request(&mut self, now: Instant) -> bool {
        let allowed = match self.last {
            None => true,
            Some(last) => now > last + self.interval,
        };
        if allowed {
            self.last = Some(now);
        }
        allowed
    }
}
