//! One-shot tick scheduling for the single-threaded event loop.
//!
//! At most one tick is pending at a time. A request made while a tick is
//! already pending is absorbed, so overlapping requests never speed up the
//! animation.

use std::time::{Duration, Instant};

/// The pending tick deadline, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    /// Request a tick `interval` after `now`.
    ///
    /// Returns false if a tick was already pending (the request is absorbed).
    pub fn schedule(&mut self, now: Instant, interval: Duration) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + interval);
        true
    }

    /// Whether a tick is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending tick, or None when nothing is pending.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due, returning its deadline.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}
