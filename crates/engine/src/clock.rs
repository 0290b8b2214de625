//! Fixed-period tick timer.
//!
//! Callers pass the current [`Instant`] in explicitly, so the timer can be
//! driven from a real clock or stepped by hand in tests.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickTimer {
    period: Duration,
    last: Instant,
    active: bool,
}

impl TickTimer {
    /// Start a timer whose first tick falls one `period` after `now`.
    pub fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            last: now,
            active: true,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the timer for good. A cancelled timer is never due again.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Fire if at least one period has elapsed since the last tick.
    ///
    /// Missed periods are dropped: after a stall the timer fires once and
    /// the next tick falls a full period after `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }
        if now.saturating_duration_since(self.last) < self.period {
            return false;
        }
        self.last = now;
        true
    }

    /// Time left until the next tick, or `None` once cancelled.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.last);
        Some(self.period.saturating_sub(elapsed))
    }
}
