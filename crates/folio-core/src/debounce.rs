//! Cancel-and-reschedule debouncing.
//!
//! Every `trigger` supersedes the pending one. The caller waits out the
//! delay with whatever timer its runtime offers and then asks whether its
//! ticket is still the latest; only the last trigger of a burst gets a yes.
//!
//! ```ignore
//! let debouncer = Debouncer::new(SCROLL_SETTLE);
//! // on every scroll event:
//! let d = debouncer.clone();
//! spawn(async move {
//!     if d.settle().await {
//!         refresh_buttons();
//!     }
//! });
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay after the last scroll event before the arrows are recomputed.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(100);

/// Identifies one trigger of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Shared debounce state. Clones observe the same pending trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule a new action, cancelling any pending one.
    pub fn trigger(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recent trigger.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Cancel the pending action without scheduling a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Trigger, wait out the delay on the tokio clock, and report whether
    /// this trigger survived.
    pub async fn settle(&self) -> bool {
        let ticket = self.trigger();
        tokio::time::sleep(self.delay).await;
        self.is_current(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_trigger_supersedes_earlier() {
        let debouncer = Debouncer::new(SCROLL_SETTLE);
        let first = debouncer.trigger();
        let second = debouncer.trigger();

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn cancel_invalidates_pending() {
        let debouncer = Debouncer::new(SCROLL_SETTLE);
        let ticket = debouncer.clone().trigger();
        debouncer.cancel();
        assert!(!debouncer.is_current(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn burst_settles_once() {
        let debouncer = Debouncer::new(SCROLL_SETTLE);
        let mut handles = Vec::new();

        for _ in 0..5 {
            let d = debouncer.clone();
            handles.push(tokio::spawn(async move { d.settle().await }));
            tokio::time::sleep(Duration::from_millis(30)).await;
        }

        let mut fired = 0;
        for handle in handles {
            if handle.await.unwrap() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_triggers_each_fire() {
        let debouncer = Debouncer::new(SCROLL_SETTLE);
        assert!(debouncer.settle().await);
        assert!(debouncer.settle().await);
    }
}
