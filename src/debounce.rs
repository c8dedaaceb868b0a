use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Trailing-edge debounce timer
// ---------------------------------------------------------------------------

/// Quiet period between the last search keystroke and the filter rebuild.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A single replaceable deadline: each [`schedule`](Debouncer::schedule)
/// supersedes any pending one, and [`poll`](Debouncer::poll) fires at most
/// once when the quiet period has elapsed. Time is passed in explicitly, so
/// the timer is independent of any UI event system.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet period as of `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True once the quiet period has elapsed; clears the deadline so the
    /// firing is single-shot.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the pending deadline, if any. Used to schedule the
    /// next repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
