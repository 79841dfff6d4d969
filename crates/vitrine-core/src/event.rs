#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard events consumed by the navigation
//! coordinator. All events derive `Clone` and `PartialEq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - The event type is generic over the menu identifier so the core stays
//!   content-agnostic; the content crate instantiates it with its closed
//!   menu enum.
//! - Pointer geometry is not carried on hover events: the host performs
//!   hit-testing and reports region-level facts (`HoverEnter`,
//!   `PointerLeftRegion`), which keeps transition logic testable without
//!   simulating input devices.
//! - Scroll offsets and viewport sizes are reported in pixels, matching
//!   [`crate::geometry`].

/// Identifier for a slide-in drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerId {
    /// Shopping-cart drawer (right edge).
    Cart,
    /// Wishlist drawer (right edge).
    Wishlist,
    /// Mobile navigation panel (left edge).
    MobileNav,
    /// Location / currency drawer.
    Location,
    /// Search overlay.
    Search,
}

/// Canonical input event.
///
/// Everything the interaction core can react to arrives as one of these,
/// produced by the embedding host's real event handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent<Id> {
    /// Pointer entered a top-level navigation trigger.
    HoverEnter(Id),

    /// Pointer left the combined trigger-row + panel region.
    PointerLeftRegion,

    /// Pointer re-entered the combined region before the close fired.
    PointerReturned,

    /// Open a drawer.
    OpenDrawer(DrawerId),

    /// Close a drawer.
    CloseDrawer(DrawerId),

    /// Toggle a drawer.
    ToggleDrawer(DrawerId),

    /// Dismiss gesture on a drawer's backdrop.
    BackdropClick(DrawerId),

    /// Open the search overlay (computes placement, closes any mega-menu).
    OpenSearch,

    /// Close the search overlay.
    CloseSearch,

    /// The scroll host reported a new carousel offset.
    ScrollChanged {
        /// Current scroll offset in pixels.
        offset_px: f32,
    },

    /// The viewport was resized.
    Resize {
        /// New viewport width in pixels.
        width_px: f32,
        /// New viewport height in pixels.
        height_px: f32,
    },
}
