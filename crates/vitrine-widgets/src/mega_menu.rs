#![forbid(unsafe_code)]

//! Hover-driven mega-menu visibility.
//!
//! Decides which top-level navigation entry's panel (if any) is visible,
//! tolerating cursor travel between the trigger row and the open panel:
//! leaving the combined region arms a short deferred close instead of
//! closing outright, and re-entering before the deadline cancels it.
//!
//! # State machine
//!
//! States are `Idle` and `Open(id)`:
//!
//! - `hover_enter` on a panel-bearing entry opens (or switches to) that
//!   panel immediately and cancels any pending close.
//! - `hover_enter` on a plain link closes any open panel immediately.
//! - `pointer_left` arms the deferred close; `pointer_returned` cancels
//!   it; `tick` fires it once the deadline passes.
//! - `force_close` closes unconditionally (used when the search overlay
//!   opens).
//!
//! At most one close is ever pending: arming always replaces the previous
//! deadline. The deadline lives inside the controller, so dropping the
//! controller drops the pending close with it.

use std::fmt;
use std::time::{Duration, Instant};

use vitrine_core::schedule::DeferredAction;
use vitrine_core::{debug, trace};

/// Configuration for hover-menu closing behavior.
#[derive(Debug, Clone)]
pub struct HoverMenuConfig {
    /// How long the pointer may stay outside the combined trigger + panel
    /// region before the panel closes.
    /// Default: 140ms
    pub close_delay: Duration,
}

impl Default for HoverMenuConfig {
    fn default() -> Self {
        Self {
            close_delay: Duration::from_millis(140),
        }
    }
}

/// Stateful controller for mega-menu panel visibility.
///
/// Feed pointer facts via [`hover_enter`](HoverMenu::hover_enter) /
/// [`pointer_left`](HoverMenu::pointer_left) /
/// [`pointer_returned`](HoverMenu::pointer_returned), drive time with
/// [`tick`](HoverMenu::tick), and read the visible panel from
/// [`active`](HoverMenu::active).
#[derive(Debug, Clone)]
pub struct HoverMenu<Id> {
    config: HoverMenuConfig,
    active: Option<Id>,
    pending_close: DeferredAction,
}

impl<Id> Default for HoverMenu<Id> {
    fn default() -> Self {
        Self {
            config: HoverMenuConfig::default(),
            active: None,
            pending_close: DeferredAction::new(),
        }
    }
}

impl<Id: Copy + PartialEq + fmt::Debug> HoverMenu<Id> {
    /// Create a controller with the given configuration.
    #[must_use]
    pub fn new(config: HoverMenuConfig) -> Self {
        Self {
            config,
            active: None,
            pending_close: DeferredAction::new(),
        }
    }

    /// The entry whose panel is currently visible, `None` when idle.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<Id> {
        self.active
    }

    /// Whether any panel is visible.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer entered a top-level trigger.
    ///
    /// Panel-bearing entries open (or switch) immediately; plain links
    /// close any open panel immediately. Both cancel a pending close.
    pub fn hover_enter(&mut self, id: Id, has_panel: bool) {
        self.pending_close.cancel();
        if has_panel {
            if self.active != Some(id) {
                debug!(menu = ?id, "mega-menu open");
            }
            self.active = Some(id);
        } else if self.active.take().is_some() {
            debug!(menu = ?id, "mega-menu closed by plain link");
        }
    }

    /// Pointer left the combined trigger-row + panel region.
    ///
    /// Arms the deferred close, replacing any previous deadline. No-op
    /// when idle.
    pub fn pointer_left(&mut self, now: Instant) {
        if self.active.is_some() {
            trace!("deferred close armed");
            self.pending_close.arm(now, self.config.close_delay);
        }
    }

    /// Pointer re-entered the combined region before the close fired.
    pub fn pointer_returned(&mut self) {
        if self.pending_close.is_armed() {
            trace!("deferred close cancelled");
            self.pending_close.cancel();
        }
    }

    /// Advance time; fires the deferred close at/after its deadline.
    ///
    /// Returns `true` when a panel was closed by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pending_close.fire(now) && self.active.take().is_some() {
            debug!("mega-menu closed after pointer left");
            return true;
        }
        false
    }

    /// Close unconditionally (e.g. the search overlay is opening).
    pub fn force_close(&mut self) {
        self.pending_close.cancel();
        if self.active.take().is_some() {
            debug!("mega-menu force-closed");
        }
    }

    /// Time until the pending close fires, `None` when no close is pending.
    ///
    /// Hosts use this to schedule the next [`tick`](HoverMenu::tick).
    #[must_use]
    pub fn next_close_in(&self, now: Instant) -> Option<Duration> {
        self.pending_close.remaining(now)
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HoverMenuConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(140);

    fn menu() -> HoverMenu<u8> {
        HoverMenu::default()
    }

    fn base() -> Instant {
        Instant::now()
    }

    // --- open / switch tests ---

    #[test]
    fn initial_state_is_idle() {
        let m = menu();
        assert!(m.active().is_none());
        assert!(!m.is_open());
    }

    #[test]
    fn panel_entry_opens_immediately() {
        let mut m = menu();
        m.hover_enter(1, true);
        assert_eq!(m.active(), Some(1));
    }

    #[test]
    fn switching_between_panel_entries_is_immediate() {
        let mut m = menu();
        m.hover_enter(1, true);
        m.hover_enter(2, true);
        assert_eq!(m.active(), Some(2));
    }

    #[test]
    fn plain_link_closes_immediately() {
        let mut m = menu();
        m.hover_enter(1, true);
        m.hover_enter(3, false);
        assert!(m.active().is_none());
    }

    #[test]
    fn plain_link_while_idle_stays_idle() {
        let mut m = menu();
        m.hover_enter(3, false);
        assert!(m.active().is_none());
    }

    // --- deferred close tests ---

    #[test]
    fn close_fires_after_delay() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);

        assert!(!m.tick(t0 + DELAY - Duration::from_millis(1)));
        assert_eq!(m.active(), Some(1));

        assert!(m.tick(t0 + DELAY));
        assert!(m.active().is_none());
    }

    #[test]
    fn close_fires_exactly_once() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);

        assert!(m.tick(t0 + DELAY));
        assert!(!m.tick(t0 + DELAY * 2));
    }

    #[test]
    fn reentry_within_delay_never_closes() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);
        m.pointer_returned();

        assert!(!m.tick(t0 + DELAY * 10));
        assert_eq!(m.active(), Some(1));
    }

    #[test]
    fn switch_during_pending_close_cancels_it() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);
        // Pointer lands on another trigger before the deadline.
        m.hover_enter(2, true);

        assert!(!m.tick(t0 + DELAY * 10));
        assert_eq!(m.active(), Some(2));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);
        // Left again later: only the newest deadline counts.
        m.pointer_returned();
        m.pointer_left(t0 + Duration::from_millis(100));

        assert!(!m.tick(t0 + DELAY));
        assert!(m.tick(t0 + Duration::from_millis(100) + DELAY));
    }

    #[test]
    fn pointer_left_while_idle_arms_nothing() {
        let t0 = base();
        let mut m = menu();
        m.pointer_left(t0);
        assert!(m.next_close_in(t0).is_none());
        assert!(!m.tick(t0 + DELAY));
    }

    // --- force close tests ---

    #[test]
    fn force_close_is_unconditional() {
        let mut m = menu();
        m.hover_enter(1, true);
        m.force_close();
        assert!(m.active().is_none());
    }

    #[test]
    fn force_close_cancels_pending_close() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        m.pointer_left(t0);
        m.force_close();

        // Re-open: the stale deadline must not close the new panel.
        m.hover_enter(2, true);
        assert!(!m.tick(t0 + DELAY * 10));
        assert_eq!(m.active(), Some(2));
    }

    // --- scheduling tests ---

    #[test]
    fn next_close_in_reports_remaining_time() {
        let t0 = base();
        let mut m = menu();
        m.hover_enter(1, true);
        assert!(m.next_close_in(t0).is_none());

        m.pointer_left(t0);
        assert_eq!(m.next_close_in(t0), Some(DELAY));
        assert_eq!(
            m.next_close_in(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn default_close_delay_is_140ms() {
        assert_eq!(
            HoverMenuConfig::default().close_delay,
            Duration::from_millis(140)
        );
    }
}
