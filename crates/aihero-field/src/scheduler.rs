//! Frame pacing.

use std::time::{Duration, Instant};

/// Paces frames at a fixed interval. Once cancelled it is never due again.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FrameScheduler {
    /// Schedule the first frame at `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now),
        }
    }

    /// Whether a frame should run at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Record that a frame ran at `now` and schedule the next one.
    ///
    /// A late frame is not followed by catch-up frames; the schedule restarts
    /// from `now`.
    pub fn complete(&mut self, now: Instant) {
        if self.next_due.is_some() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Time left until the next frame, `None` once cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Cancel the pending frame.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
