//! Stat widget with a delayed commit
//!
//! Idle -> Pending(value) -> Committed. Scheduling while pending cancels the
//! earlier value, so overlapping updates resolve to the latest. The committed
//! value itself lives in the view.

use super::timer::Deadline;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum StatPhase<T> {
    Idle,
    Pending(T),
    Committed,
}

#[derive(Debug, Clone)]
pub struct StatWidget<T> {
    phase: StatPhase<T>,
    deadline: Deadline,
    delay: Duration,
}

impl<T> StatWidget<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            phase: StatPhase::Idle,
            deadline: Deadline::default(),
            delay,
        }
    }

    /// Queues `value` for display after the transition delay.
    /// Returns true when this replaced a value that never got shown.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let replaced = matches!(self.phase, StatPhase::Pending(_));
        self.phase = StatPhase::Pending(value);
        self.deadline.arm(now, self.delay);
        replaced
    }

    /// Commits the pending value once its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if !self.deadline.fire(now) {
            return None;
        }
        match std::mem::replace(&mut self.phase, StatPhase::Idle) {
            StatPhase::Pending(value) => {
                self.phase = StatPhase::Committed;
                Some(value)
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, StatPhase::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    #[test]
    fn value_is_not_shown_before_delay() {
        let t0 = Instant::now();
        let mut widget = StatWidget::new(DELAY);
        widget.schedule("$10.00", t0);

        assert_eq!(widget.poll(t0 + Duration::from_millis(149)), None);
        assert!(widget.is_transitioning());

        assert_eq!(widget.poll(t0 + DELAY), Some("$10.00"));
        assert_eq!(widget.phase, StatPhase::Committed);
        assert!(!widget.is_transitioning());
    }

    #[test]
    fn overlapping_updates_cancel_and_replace() {
        let t0 = Instant::now();
        let mut widget = StatWidget::new(DELAY);
        assert!(!widget.schedule("first", t0));
        assert!(widget.schedule("second", t0 + Duration::from_millis(100)));

        // the first deadline would have fired here
        assert_eq!(widget.poll(t0 + Duration::from_millis(160)), None);
        assert_eq!(widget.poll(t0 + Duration::from_millis(250)), Some("second"));
        assert_eq!(widget.poll(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn commits_again_after_a_new_schedule() {
        let t0 = Instant::now();
        let mut widget = StatWidget::new(DELAY);
        widget.schedule(1, t0);
        assert_eq!(widget.poll(t0 + DELAY), Some(1));

        assert!(!widget.schedule(2, t0 + Duration::from_secs(1)));
        assert_eq!(widget.phase, StatPhase::Pending(2));
        assert_eq!(widget.poll(t0 + Duration::from_secs(2)), Some(2));
        assert_eq!(widget.phase, StatPhase::Committed);
    }
}
