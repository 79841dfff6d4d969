#![forbid(unsafe_code)]

//! Anchored search-overlay placement.
//!
//! Computes absolute coordinates for the search box so that it hangs
//! centered under its trigger, sits just below the header, and never
//! overflows the viewport horizontally. Placement is a pure function of
//! measurements: callers compute it once when the overlay opens and cache
//! the result.
//!
//! When any required measurement is unavailable (element not mounted,
//! zero-size, host without a viewport) the computation yields `None` and
//! the overlay renders centered with default styling instead.

use vitrine_core::geometry::clamp_range;
use vitrine_core::measure::{ElementId, Measure};

/// Minimum overlay width in pixels.
pub const MIN_WIDTH_PX: f32 = 320.0;

/// Maximum overlay width in pixels.
pub const MAX_WIDTH_PX: f32 = 800.0;

/// Preferred overlay width as a fraction of the viewport.
pub const WIDTH_VIEWPORT_RATIO: f32 = 0.44;

/// Minimum distance kept between the overlay and the viewport edges.
pub const GUTTER_PX: f32 = 12.0;

/// Vertical gap between the header's bottom edge and the overlay.
pub const HEADER_GAP_PX: f32 = 8.0;

/// Stacking order of the search overlay.
pub const SEARCH_LAYER: u8 = 60;

/// The three elements the placement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayAnchors {
    /// The search trigger (icon/button) the overlay centers under.
    pub trigger: ElementId,
    /// The header element the overlay hangs below.
    pub header: ElementId,
    /// The fixed positioning context the coordinates are relative to.
    pub context: ElementId,
}

/// Computed overlay coordinates, relative to the positioning context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPlacement {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Overlay width.
    pub width: f32,
    /// Stacking order.
    pub layer: u8,
}

/// Compute the overlay placement from current measurements.
///
/// Returns `None` when any required measurement is unavailable; the caller
/// falls back to centered default styling.
#[must_use]
pub fn compute_placement(
    measure: &impl Measure,
    anchors: OverlayAnchors,
) -> Option<OverlayPlacement> {
    let viewport = measure.viewport()?;
    let trigger = measure.bounding_rect(anchors.trigger)?;
    let header = measure.bounding_rect(anchors.header)?;
    let context = measure.bounding_rect(anchors.context)?;

    let vw = viewport.width;
    let width = (vw * WIDTH_VIEWPORT_RATIO)
        .round()
        .clamp(MIN_WIDTH_PX, MAX_WIDTH_PX);

    let left = clamp_range(
        trigger.center_x() - width / 2.0,
        GUTTER_PX,
        vw - width - GUTTER_PX,
    );

    // The positioning context is itself fixed to the viewport, so placing
    // relative to its top keeps the overlay attached to the header.
    let top = (header.bottom() - context.top() + HEADER_GAP_PX).max(0.0);

    Some(OverlayPlacement {
        left,
        top,
        width,
        layer: SEARCH_LAYER,
    })
}
