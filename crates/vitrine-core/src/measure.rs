#![forbid(unsafe_code)]

//! Measurement-provider capability.
//!
//! The interaction core never touches a real layout engine. Positioning
//! code asks a [`Measure`] implementation for element rectangles and the
//! viewport size, and every consumer degrades to a neutral default when a
//! query returns `None` (element not mounted, zero-size, or the host has
//! no viewport concept at all).
//!
//! Hosts assign [`ElementId`]s to the handful of elements the core needs
//! to measure (search trigger, header, positioning context, first
//! carousel card) and answer queries synchronously from their current
//! layout state.

use crate::geometry::{RectPx, SizePx};

/// Stable identifier for a measurable element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create a new element ID.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Synchronous layout queries against the embedding host.
pub trait Measure {
    /// Bounding rectangle of an element, in viewport coordinates.
    ///
    /// `None` when the element is not mounted or has no measurable area.
    fn bounding_rect(&self, id: ElementId) -> Option<RectPx>;

    /// Current viewport size.
    ///
    /// `None` when the host has no viewport concept.
    fn viewport(&self) -> Option<SizePx>;
}

/// A synthetic measurement provider backed by a fixed table.
///
/// Intended for tests: insert the rectangles a scenario needs and hand it
/// to positioning code in place of a real host.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct FixedMeasure {
    rects: std::collections::HashMap<ElementId, RectPx>,
    viewport: Option<SizePx>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl FixedMeasure {
    /// Create an empty provider (every query answers `None`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport size.
    #[must_use]
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Some(SizePx::new(width, height));
        self
    }

    /// Register an element rectangle.
    #[must_use]
    pub fn with_rect(mut self, id: ElementId, rect: RectPx) -> Self {
        self.rects.insert(id, rect);
        self
    }

    /// Remove an element rectangle (simulate unmount).
    pub fn remove(&mut self, id: ElementId) {
        self.rects.remove(&id);
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Measure for FixedMeasure {
    fn bounding_rect(&self, id: ElementId) -> Option<RectPx> {
        self.rects.get(&id).copied().filter(|r| !r.is_empty())
    }

    fn viewport(&self) -> Option<SizePx> {
        self.viewport.filter(|v| !v.is_empty())
    }
}
