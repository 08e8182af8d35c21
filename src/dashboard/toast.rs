//! Error toast with auto-hide

use super::timer::Deadline;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub(super) message: Option<String>,
    hide: Deadline,
    visible_for: Duration,
}

impl Toast {
    pub fn new(visible_for: Duration) -> Self {
        Self {
            message: None,
            hide: Deadline::default(),
            visible_for,
        }
    }

    /// Shows `message`, replacing any visible text and restarting the hide timer.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.hide.arm(now, self.visible_for);
    }

    /// Hides the toast once its window has elapsed. Returns true on the hiding poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.hide.fire(now) {
            self.message = None;
            return true;
        }
        false
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.hide.remaining(now)
    }
}
