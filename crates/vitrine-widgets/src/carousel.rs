#![forbid(unsafe_code)]

//! Paged product carousel.
//!
//! A horizontally scrollable strip of fixed-width cards showing a partial
//! window. The browser-equivalent scroll mechanism owns the offset: this
//! component only reads reported metrics and hands back scroll commands,
//! so it can never disagree with the host about where the strip actually
//! is.
//!
//! # Invariants
//!
//! 1. `progress_percent` is non-decreasing in the offset, `0` at the start
//!    and `100` at the end of the scrollable range.
//! 2. When the content fits the viewport, both scroll flags are false and
//!    progress reads `100`.
//! 3. [`page`](Carousel::page) recomputes its step from current metrics on
//!    every call; rapid repeated calls never act on stale layout.

use vitrine_core::geometry::SizePx;

/// Fixed gap between adjacent cards, in pixels.
pub const ITEM_GAP_PX: f32 = 20.0;

/// Tolerance against floating-point/layout rounding at the far edge.
pub const EDGE_EPSILON_PX: f32 = 1.0;

/// Step fraction of the viewport used when no card is measurable.
pub const FALLBACK_VIEWPORT_RATIO: f32 = 0.8;

/// Layout snapshot reported by the scroll host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CarouselMetrics {
    /// Current scroll offset in pixels.
    pub scroll_offset: f32,
    /// Total scrollable width of the strip.
    pub content_extent: f32,
    /// Visible width of the strip.
    pub viewport_extent: f32,
    /// Width of the first card, `None` when no card is measurable.
    pub first_item_width: Option<f32>,
}

impl CarouselMetrics {
    /// Maximum reachable offset. Negative when the content fits.
    #[inline]
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        self.content_extent - self.viewport_extent
    }
}

/// Derived scroll-boundary flags and progress ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Whether paging backwards can move the strip.
    pub can_scroll_prev: bool,
    /// Whether paging forwards can move the strip.
    pub can_scroll_next: bool,
    /// Scroll progress in `[0, 100]`; `100` when the content fits.
    pub progress_percent: f32,
}

/// Paging direction for arrow controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Toward the start of the strip.
    Prev,
    /// Toward the end of the strip.
    Next,
}

impl PageDirection {
    /// Signed unit factor for this direction.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> f32 {
        match self {
            PageDirection::Prev => -1.0,
            PageDirection::Next => 1.0,
        }
    }
}

/// How the scroll host should animate a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump without animation.
    Auto,
    /// Animate the transition.
    #[default]
    Smooth,
}

/// A "scroll by delta" command for the scroll host.
///
/// The host applies the delta to its current offset and clamps to the
/// scrollable range; the carousel never writes the offset itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    /// Signed offset change in pixels.
    pub delta_px: f32,
    /// Requested animation behavior.
    pub behavior: ScrollBehavior,
}

/// Interaction state for the product showcase strip.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    metrics: CarouselMetrics,
}

impl Carousel {
    /// Create a carousel with unmeasured layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full layout snapshot (mount, item changes, resize).
    pub fn measured(&mut self, metrics: CarouselMetrics) {
        self.metrics = metrics;
    }

    /// Record a new offset reported by the scroll host.
    pub fn scroll_changed(&mut self, offset_px: f32) {
        self.metrics.scroll_offset = offset_px;
    }

    /// Current layout snapshot.
    #[inline]
    #[must_use]
    pub fn metrics(&self) -> CarouselMetrics {
        self.metrics
    }

    /// Step size for one page: first card width plus the inter-card gap,
    /// falling back to a fraction of the viewport when no card measures.
    ///
    /// `None` when the viewport itself is unmeasured.
    #[must_use]
    pub fn page_step(&self) -> Option<f32> {
        match self.metrics.first_item_width {
            Some(w) if w > 0.0 && w.is_finite() => Some(w + ITEM_GAP_PX),
            _ => {
                let vw = self.metrics.viewport_extent;
                (vw > 0.0 && vw.is_finite()).then(|| vw * FALLBACK_VIEWPORT_RATIO)
            }
        }
    }

    /// Derive scroll-boundary flags and progress from current metrics.
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        let max_scroll = self.metrics.max_scroll();
        if !(max_scroll > 0.0) || !max_scroll.is_finite() {
            // Content fits entirely (or layout is unmeasured): nothing to
            // scroll, indicator reads full.
            return ScrollState {
                can_scroll_prev: false,
                can_scroll_next: false,
                progress_percent: 100.0,
            };
        }

        let offset = self.metrics.scroll_offset;
        ScrollState {
            can_scroll_prev: offset > 0.0,
            can_scroll_next: offset < max_scroll - EDGE_EPSILON_PX,
            progress_percent: (offset / max_scroll * 100.0).clamp(0.0, 100.0),
        }
    }

    /// Build the command that pages the strip by exactly one card.
    ///
    /// The step is recomputed from current metrics on every call. Returns
    /// `None` when neither a card nor the viewport is measurable.
    #[must_use]
    pub fn page(&self, direction: PageDirection) -> Option<ScrollCommand> {
        let step = self.page_step()?;
        Some(ScrollCommand {
            delta_px: step * direction.signum(),
            behavior: ScrollBehavior::Smooth,
        })
    }

    /// Convenience for hosts that report viewport size separately.
    pub fn viewport_resized(&mut self, viewport: SizePx) {
        self.metrics.viewport_extent = viewport.width;
    }
}
