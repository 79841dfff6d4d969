#![forbid(unsafe_code)]

//! Cancellable one-shot deferred actions.
//!
//! The only asynchronous element in the interaction core is the mega-menu's
//! deferred close. [`DeferredAction`] models it as a single deadline owned
//! by one state holder and polled with explicit timestamps: no threads, no
//! callbacks, nothing to leak on teardown.
//!
//! # Invariants
//!
//! 1. At most one deadline is pending at a time; [`arm`](DeferredAction::arm)
//!    always replaces any previous deadline.
//! 2. A [`cancel`](DeferredAction::cancel) issued before the deadline is
//!    observed via [`fire`](DeferredAction::fire) always wins (everything
//!    runs on one thread).
//! 3. `fire` returns `true` at most once per armed deadline.

use std::time::{Duration, Instant};

/// A single cancellable deadline, polled with explicit timestamps.
#[derive(Debug, Clone, Default)]
pub struct DeferredAction {
    deadline: Option<Instant>,
}

impl DeferredAction {
    /// Create an unarmed action.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm (or re-arm) the deadline at `now + delay`.
    ///
    /// Any previously pending deadline is discarded.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Discard any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending deadline, `None` when unarmed.
    ///
    /// Hosts use this to schedule their next wake-up instead of polling.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Observe the deadline: returns `true` exactly once when `now` has
    /// reached it, disarming in the process.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
