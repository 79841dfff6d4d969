#![forbid(unsafe_code)]

//! Navigation chrome coordinator.
//!
//! [`NavChrome`] owns the navigation-side components (mega-menu, drawer
//! set, search-overlay placement) and routes canonical [`UiEvent`]s to
//! them. The product carousel is deliberately not part of the chrome: it
//! lives in the showcase section and is driven independently.
//!
//! Overlay placement is computed once per search open and cached until the
//! overlay closes; resizes while it is open do not reposition it.

use std::time::Instant;

use vitrine_core::event::{DrawerId, UiEvent};
use vitrine_core::measure::Measure;

use crate::content::{ContentRegistry, MenuId};
use crate::drawers::DrawerSet;
use crate::mega_menu::{HoverMenu, HoverMenuConfig};
use crate::overlay::{OverlayAnchors, OverlayPlacement, compute_placement};

/// Owns and coordinates the navigation-side interaction state.
#[derive(Debug, Clone)]
pub struct NavChrome {
    content: ContentRegistry,
    anchors: OverlayAnchors,
    menu: HoverMenu<MenuId>,
    drawers: DrawerSet,
    search_placement: Option<OverlayPlacement>,
}

impl NavChrome {
    /// Create the chrome around an injected content registry.
    #[must_use]
    pub fn new(content: ContentRegistry, anchors: OverlayAnchors) -> Self {
        Self::with_config(content, anchors, HoverMenuConfig::default())
    }

    /// Create the chrome with a custom hover-menu configuration.
    #[must_use]
    pub fn with_config(
        content: ContentRegistry,
        anchors: OverlayAnchors,
        config: HoverMenuConfig,
    ) -> Self {
        Self {
            content,
            anchors,
            menu: HoverMenu::new(config),
            drawers: DrawerSet::new(),
            search_placement: None,
        }
    }

    /// Route one canonical event.
    pub fn handle_event(
        &mut self,
        event: UiEvent<MenuId>,
        now: Instant,
        measure: &impl Measure,
    ) {
        match event {
            UiEvent::HoverEnter(id) => {
                let has_panel = self.content.has_panel(id);
                self.menu.hover_enter(id, has_panel);
            }
            UiEvent::PointerLeftRegion => self.menu.pointer_left(now),
            UiEvent::PointerReturned => self.menu.pointer_returned(),

            UiEvent::OpenSearch | UiEvent::OpenDrawer(DrawerId::Search) => {
                self.open_search(measure);
            }
            UiEvent::CloseSearch
            | UiEvent::CloseDrawer(DrawerId::Search)
            | UiEvent::BackdropClick(DrawerId::Search) => self.close_search(),
            UiEvent::ToggleDrawer(DrawerId::Search) => {
                if self.drawers.is_open(DrawerId::Search) {
                    self.close_search();
                } else {
                    self.open_search(measure);
                }
            }

            UiEvent::OpenDrawer(id) => self.drawers.open(id),
            UiEvent::CloseDrawer(id) => self.drawers.close(id),
            UiEvent::ToggleDrawer(id) => self.drawers.toggle(id),
            UiEvent::BackdropClick(id) => self.drawers.backdrop_click(id),

            // The showcase carousel consumes scroll reports; the chrome has
            // no scroll-dependent state.
            UiEvent::ScrollChanged { .. } => {}

            // An open overlay keeps its placement until it closes.
            UiEvent::Resize { .. } => {}
        }
    }

    /// Advance time: fires the mega-menu's deferred close when due.
    ///
    /// Returns `true` when a panel closed on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.menu.tick(now)
    }

    fn open_search(&mut self, measure: &impl Measure) {
        // Opening search always dismisses any mega-menu panel.
        self.menu.force_close();
        if !self.drawers.is_open(DrawerId::Search) {
            self.search_placement = compute_placement(measure, self.anchors);
            self.drawers.open(DrawerId::Search);
        }
    }

    fn close_search(&mut self) {
        self.drawers.close(DrawerId::Search);
        self.search_placement = None;
    }

    /// The entry whose mega-panel is currently visible.
    #[inline]
    #[must_use]
    pub fn active_menu(&self) -> Option<MenuId> {
        self.menu.active()
    }

    /// Cached search-overlay placement; `None` when the overlay is closed
    /// or measurements were unavailable at open time (centered fallback).
    #[inline]
    #[must_use]
    pub fn search_placement(&self) -> Option<OverlayPlacement> {
        self.search_placement
    }

    /// Drawer visibility state.
    #[inline]
    #[must_use]
    pub fn drawers(&self) -> &DrawerSet {
        &self.drawers
    }

    /// The hover-menu controller.
    #[inline]
    #[must_use]
    pub fn menu(&self) -> &HoverMenu<MenuId> {
        &self.menu
    }

    /// The injected content registry.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }
}
