//! Property-based invariant tests for the carousel.
//!
//! These tests verify the derived-state contract for any reachable layout:
//!
//! 1. Progress is non-decreasing in the scroll offset.
//! 2. Progress is 0 at the start and 100 at the end of the range.
//! 3. Progress stays within [0, 100] even for out-of-range offsets
//!    (overscroll reported mid-rubber-band).
//! 4. Fitting content always reads as the degenerate state.
//! 5. The paging step is exactly the card width plus the gap, and the
//!    offset stays in range after the host applies and clamps a command.
//! 6. Paging commands are stable under repeated calls.

use proptest::prelude::*;
use vitrine_widgets::carousel::{Carousel, CarouselMetrics, ITEM_GAP_PX, PageDirection};

// ── Helpers ─────────────────────────────────────────────────────────────

/// A strip that genuinely overflows its viewport.
fn scrollable_strategy() -> impl Strategy<Value = CarouselMetrics> {
    (100.0f32..2000.0, 10.0f32..2000.0, 50.0f32..600.0).prop_map(|(viewport, overflow, card)| {
        CarouselMetrics {
            scroll_offset: 0.0,
            content_extent: viewport + overflow,
            viewport_extent: viewport,
            first_item_width: Some(card),
        }
    })
}

fn carousel_with(metrics: CarouselMetrics) -> Carousel {
    let mut c = Carousel::new();
    c.measured(metrics);
    c
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Progress is non-decreasing in the offset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn progress_monotonic_in_offset(
        metrics in scrollable_strategy(),
        a in 0.0f32..1.0,
        b in 0.0f32..1.0,
    ) {
        let max = metrics.max_scroll();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mut c = carousel_with(metrics);

        c.scroll_changed(lo * max);
        let p_lo = c.scroll_state().progress_percent;
        c.scroll_changed(hi * max);
        let p_hi = c.scroll_state().progress_percent;

        prop_assert!(p_lo <= p_hi + 1e-3, "progress regressed: {} -> {}", p_lo, p_hi);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Progress endpoints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn progress_endpoints(metrics in scrollable_strategy()) {
        let max = metrics.max_scroll();
        let mut c = carousel_with(metrics);

        c.scroll_changed(0.0);
        prop_assert_eq!(c.scroll_state().progress_percent, 0.0);
        prop_assert!(!c.scroll_state().can_scroll_prev);

        c.scroll_changed(max);
        prop_assert_eq!(c.scroll_state().progress_percent, 100.0);
        prop_assert!(!c.scroll_state().can_scroll_next);
        prop_assert!(c.scroll_state().can_scroll_prev);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Progress bounded under overscroll
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn progress_bounded_under_overscroll(
        metrics in scrollable_strategy(),
        overshoot in -500.0f32..500.0,
    ) {
        let max = metrics.max_scroll();
        let mut c = carousel_with(metrics);
        // Rubber-banding hosts can briefly report offsets outside [0, max].
        c.scroll_changed(if overshoot < 0.0 { overshoot } else { max + overshoot });
        let p = c.scroll_state().progress_percent;
        prop_assert!((0.0..=100.0).contains(&p), "progress out of range: {}", p);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fitting content is degenerate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitting_content_is_degenerate(
        viewport in 100.0f32..2000.0,
        fit in 0.0f32..1.0,
        offset in 0.0f32..100.0,
    ) {
        let mut c = carousel_with(CarouselMetrics {
            scroll_offset: offset,
            content_extent: viewport * fit,
            viewport_extent: viewport,
            first_item_width: Some(120.0),
        });
        c.scroll_changed(offset);
        let state = c.scroll_state();
        prop_assert!(!state.can_scroll_prev);
        prop_assert!(!state.can_scroll_next);
        prop_assert_eq!(state.progress_percent, 100.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Step size and host clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn step_is_card_plus_gap_and_offset_stays_in_range(
        metrics in scrollable_strategy(),
        start in 0.0f32..1.0,
    ) {
        let max = metrics.max_scroll();
        let card = metrics.first_item_width.unwrap();
        let mut c = carousel_with(metrics);
        c.scroll_changed(start * max);

        let cmd = c.page(PageDirection::Next).unwrap();
        prop_assert!((cmd.delta_px - (card + ITEM_GAP_PX)).abs() < 1e-3);

        // The host applies the delta and clamps to the scrollable range.
        let applied = (c.metrics().scroll_offset + cmd.delta_px).clamp(0.0, max);
        c.scroll_changed(applied);
        prop_assert!((0.0..=max).contains(&c.metrics().scroll_offset));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Paging is stable under repeated calls
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeated_page_calls_agree(metrics in scrollable_strategy()) {
        let c = carousel_with(metrics);
        let first = c.page(PageDirection::Next).unwrap();
        let second = c.page(PageDirection::Next).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Deterministic walk: arrow-paging traverses the whole strip
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn paging_walks_to_the_end_and_back() {
    let mut c = Carousel::new();
    c.measured(CarouselMetrics {
        scroll_offset: 0.0,
        content_extent: 2260.0,
        viewport_extent: 800.0,
        first_item_width: Some(300.0),
    });
    let max = c.metrics().max_scroll();

    // Forward until the next arrow disables.
    let mut hops = 0;
    while c.scroll_state().can_scroll_next {
        let cmd = c.page(PageDirection::Next).unwrap();
        let applied = (c.metrics().scroll_offset + cmd.delta_px).clamp(0.0, max);
        c.scroll_changed(applied);
        hops += 1;
        assert!(hops < 32, "next arrow never disabled");
    }
    assert_eq!(c.scroll_state().progress_percent, 100.0);

    // Backward until the prev arrow disables.
    while c.scroll_state().can_scroll_prev {
        let cmd = c.page(PageDirection::Prev).unwrap();
        let applied = (c.metrics().scroll_offset + cmd.delta_px).clamp(0.0, max);
        c.scroll_changed(applied);
        hops += 1;
        assert!(hops < 64, "prev arrow never disabled");
    }
    assert_eq!(c.scroll_state().progress_percent, 0.0);
}
