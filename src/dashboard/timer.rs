//! Cancellable one-shot deadline
//!
//! Timers are polled from the UI tick rather than running on their own task,
//! so arming a new deadline simply replaces the previous one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    /// Arms the deadline `delay` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Returns true exactly once, on the first poll at or after the due time.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline fires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }
}
