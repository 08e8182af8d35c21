//! Reference-counted loading indicator
//!
//! Every in-flight submission holds a `LoadingGuard`; the indicator stays
//! visible until the last guard is dropped, whichever way the submission ends.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingIndicator {
    pub fn acquire(&self) -> LoadingGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn is_visible(&self) -> bool {
        self.in_flight() > 0
    }
}

#[derive(Debug)]
pub struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_until_last_guard_drops() {
        let indicator = LoadingIndicator::default();
        let first = indicator.acquire();
        let second = indicator.acquire();
        assert_eq!(indicator.in_flight(), 2);

        drop(first);
        assert!(indicator.is_visible());
        drop(second);
        assert!(!indicator.is_visible());
    }

    #[tokio::test]
    async fn guard_released_when_task_panics() {
        let indicator = LoadingIndicator::default();
        let guard = indicator.acquire();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            panic!("request task failed");
        });
        assert!(handle.await.is_err());
        assert!(!indicator.is_visible());
    }
}
