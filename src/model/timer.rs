//! Cancellable refresh schedule for one region view.
//!
//! Nothing here sleeps or spawns: the UI loop asks whether a view is due
//! and how long until the next one is, then requests a repaint for then.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    /// `None` once cancelled.
    next_due: Option<Instant>,
}

impl RefreshTimer {
    /// Start a schedule whose first tick is due immediately.
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: Some(now),
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.next_due, Some(due) if now >= due)
    }

    /// Schedule the next tick one interval after the previous one completed.
    /// Has no effect on a cancelled timer.
    pub fn reschedule(&mut self, completed_at: Instant) {
        if self.next_due.is_some() {
            self.next_due = Some(completed_at + self.interval);
        }
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.next_due.is_none()
    }

    /// Zero if already due, `None` if cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
