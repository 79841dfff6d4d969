#![forbid(unsafe_code)]

//! Storefront interaction components for Vitrine.
//!
//! Four headless components cover the interactive core of the landing UI:
//!
//! - [`carousel::Carousel`] — paged horizontal product strip
//! - [`mega_menu::HoverMenu`] — hover-driven panel visibility with
//!   deferred close
//! - [`overlay`] — anchored search-overlay placement
//! - [`drawers::DrawerSet`] — mutually exclusive slide-in panels
//!
//! [`shell::NavChrome`] wires the navigation-related components together;
//! the carousel is driven independently by the product showcase.

pub mod carousel;
pub mod content;
pub mod drawers;
pub mod mega_menu;
pub mod overlay;
pub mod shell;

pub use carousel::{
    Carousel, CarouselMetrics, PageDirection, ScrollBehavior, ScrollCommand, ScrollState,
};
pub use content::{ContentRegistry, MenuId};
pub use drawers::{DrawerFlags, DrawerSet};
pub use mega_menu::{HoverMenu, HoverMenuConfig};
pub use overlay::{OverlayAnchors, OverlayPlacement, compute_placement};
pub use shell::NavChrome;
