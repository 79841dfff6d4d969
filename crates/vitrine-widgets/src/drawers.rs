#![forbid(unsafe_code)]

//! Slide-in drawer arbitration.
//!
//! Tracks visibility for the storefront's overlay panels. Cart and
//! wishlist are mutually exclusive: opening one closes the other. The
//! mobile navigation panel, the location drawer, and the search overlay
//! are independent toggles and are not auto-closed by other drawers
//! opening. The asymmetry is intentional and matches the shipped site.

use bitflags::bitflags;
use vitrine_core::event::DrawerId;

bitflags! {
    /// Visibility flags for the drawer panels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DrawerFlags: u8 {
        /// Shopping-cart drawer.
        const CART = 1 << 0;
        /// Wishlist drawer.
        const WISHLIST = 1 << 1;
        /// Mobile navigation panel.
        const MOBILE_NAV = 1 << 2;
        /// Location / currency drawer.
        const LOCATION = 1 << 3;
        /// Search overlay.
        const SEARCH = 1 << 4;
    }
}

impl DrawerFlags {
    /// The flag for a drawer identifier.
    #[must_use]
    pub const fn from_id(id: DrawerId) -> DrawerFlags {
        match id {
            DrawerId::Cart => DrawerFlags::CART,
            DrawerId::Wishlist => DrawerFlags::WISHLIST,
            DrawerId::MobileNav => DrawerFlags::MOBILE_NAV,
            DrawerId::Location => DrawerFlags::LOCATION,
            DrawerId::Search => DrawerFlags::SEARCH,
        }
    }

    /// The exclusivity group a drawer belongs to; empty for independent
    /// drawers.
    #[must_use]
    pub const fn group_of(id: DrawerId) -> DrawerFlags {
        match id {
            DrawerId::Cart | DrawerId::Wishlist => {
                DrawerFlags::CART.union(DrawerFlags::WISHLIST)
            }
            DrawerId::MobileNav | DrawerId::Location | DrawerId::Search => DrawerFlags::empty(),
        }
    }
}

/// Visibility arbiter for the drawer panels.
#[derive(Debug, Clone, Default)]
pub struct DrawerSet {
    visible: DrawerFlags,
}

impl DrawerSet {
    /// Create a set with every drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a drawer, closing the other members of its exclusivity group.
    pub fn open(&mut self, id: DrawerId) {
        let flag = DrawerFlags::from_id(id);
        let conflicting = DrawerFlags::group_of(id).difference(flag);
        self.visible.remove(conflicting);
        self.visible.insert(flag);
    }

    /// Close a drawer. Other drawers are unaffected.
    pub fn close(&mut self, id: DrawerId) {
        self.visible.remove(DrawerFlags::from_id(id));
    }

    /// Toggle a drawer, routing through [`open`](DrawerSet::open) /
    /// [`close`](DrawerSet::close) so exclusivity still applies.
    pub fn toggle(&mut self, id: DrawerId) {
        if self.is_open(id) {
            self.close(id);
        } else {
            self.open(id);
        }
    }

    /// Dismiss gesture on a drawer's backdrop: same as closing it.
    pub fn backdrop_click(&mut self, id: DrawerId) {
        self.close(id);
    }

    /// Whether a drawer is visible.
    #[inline]
    #[must_use]
    pub fn is_open(&self, id: DrawerId) -> bool {
        self.visible.contains(DrawerFlags::from_id(id))
    }

    /// Current visibility flags.
    #[inline]
    #[must_use]
    pub fn flags(&self) -> DrawerFlags {
        self.visible
    }
}
