#![forbid(unsafe_code)]

//! Immutable content registry.
//!
//! The navigation tree and showcase catalog are configuration: loaded once
//! at startup, injected into the components that read them, and never
//! mutated afterwards. Nothing in this module exposes interior mutability;
//! sharing is by reference (or by cloning the whole registry).

/// Top-level navigation entry identifier. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// Men's collection.
    Men,
    /// Women's collection.
    Women,
    /// Editorial / lookbook section.
    Explore,
    /// Sustainability story (plain link, no panel).
    Sustainability,
    /// Help & contact (plain link, no panel).
    Help,
}

impl MenuId {
    /// Every menu identifier, in navigation order.
    pub const ALL: [MenuId; 5] = [
        MenuId::Men,
        MenuId::Women,
        MenuId::Explore,
        MenuId::Sustainability,
        MenuId::Help,
    ];
}

/// A single link inside a mega-panel column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target.
    pub href: String,
}

impl NavLink {
    /// Create a link.
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A headed column of links inside a mega-panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkColumn {
    /// Column heading.
    pub heading: String,
    /// Links in display order.
    pub links: Vec<NavLink>,
}

/// An image tile inside a mega-panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTile {
    /// Caption under the image.
    pub caption: String,
    /// Image source.
    pub image_url: String,
    /// Link target.
    pub href: String,
}

/// Panel content revealed when hovering a panel-bearing entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuPanel {
    /// Link columns, left to right.
    pub columns: Vec<LinkColumn>,
    /// Featured image tiles.
    pub tiles: Vec<ImageTile>,
}

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Entry identifier.
    pub id: MenuId,
    /// Display label.
    pub label: String,
    /// Panel content; `None` for plain links.
    pub panel: Option<MenuPanel>,
}

/// A product card in the showcase carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseItem {
    /// Stable item identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Pre-formatted price label.
    pub price_label: String,
    /// Card image source.
    pub image_url: String,
    /// Product page target.
    pub href: String,
}

/// Read-only registry of navigation and catalog content.
///
/// Constructed once at startup and handed to the components that need it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegistry {
    entries: Vec<NavEntry>,
    items: Vec<ShowcaseItem>,
}

impl ContentRegistry {
    /// Build a registry from navigation entries and showcase items.
    #[must_use]
    pub fn new(entries: Vec<NavEntry>, items: Vec<ShowcaseItem>) -> Self {
        Self { entries, items }
    }

    /// Navigation entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Showcase items in display order.
    #[must_use]
    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    /// Look up a navigation entry.
    #[must_use]
    pub fn entry(&self, id: MenuId) -> Option<&NavEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether an entry reveals a mega-panel on hover.
    ///
    /// Unregistered ids read as plain links.
    #[must_use]
    pub fn has_panel(&self, id: MenuId) -> bool {
        self.entry(id).is_some_and(|e| e.panel.is_some())
    }

    /// The storefront's stock navigation tree and catalog.
    ///
    /// Used by tests and as an embedding default.
    #[must_use]
    pub fn demo() -> Self {
        let collection_panel = |prefix: &str| MenuPanel {
            columns: vec![
                LinkColumn {
                    heading: "Shop".into(),
                    links: vec![
                        NavLink::new("Raincoats", format!("/{prefix}/raincoats")),
                        NavLink::new("Anoraks", format!("/{prefix}/anoraks")),
                        NavLink::new("Rain Boots", format!("/{prefix}/boots")),
                        NavLink::new("Accessories", format!("/{prefix}/accessories")),
                    ],
                },
                LinkColumn {
                    heading: "Featured".into(),
                    links: vec![
                        NavLink::new("New Arrivals", format!("/{prefix}/new")),
                        NavLink::new("Bestsellers", format!("/{prefix}/bestsellers")),
                    ],
                },
            ],
            tiles: vec![ImageTile {
                caption: "The City Shell".into(),
                image_url: format!("/img/tiles/{prefix}-city-shell.jpg"),
                href: format!("/{prefix}/city-shell"),
            }],
        };

        let entries = vec![
            NavEntry {
                id: MenuId::Men,
                label: "Men".into(),
                panel: Some(collection_panel("men")),
            },
            NavEntry {
                id: MenuId::Women,
                label: "Women".into(),
                panel: Some(collection_panel("women")),
            },
            NavEntry {
                id: MenuId::Explore,
                label: "Explore".into(),
                panel: Some(MenuPanel {
                    columns: vec![LinkColumn {
                        heading: "Stories".into(),
                        links: vec![
                            NavLink::new("Fall Lookbook", "/explore/lookbook"),
                            NavLink::new("Fabric Lab", "/explore/fabric-lab"),
                        ],
                    }],
                    tiles: vec![ImageTile {
                        caption: "Walking in Bergen".into(),
                        image_url: "/img/tiles/bergen.jpg".into(),
                        href: "/explore/bergen".into(),
                    }],
                }),
            },
            NavEntry {
                id: MenuId::Sustainability,
                label: "Sustainability".into(),
                panel: None,
            },
            NavEntry {
                id: MenuId::Help,
                label: "Help".into(),
                panel: None,
            },
        ];

        let item = |id: &str, name: &str, price: &str| ShowcaseItem {
            id: id.into(),
            name: name.into(),
            price_label: price.into(),
            image_url: format!("/img/products/{id}.jpg"),
            href: format!("/products/{id}"),
        };

        let items = vec![
            item("city-shell", "City Shell Raincoat", "€249"),
            item("fjord-anorak", "Fjord Anorak", "€189"),
            item("harbor-parka", "Harbor Parka", "€299"),
            item("drizzle-cap", "Drizzle Cap", "€49"),
            item("puddle-boot", "Puddle Boot", "€129"),
            item("mist-poncho", "Mist Poncho", "€99"),
        ];

        Self::new(entries, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_covers_every_menu_id() {
        let content = ContentRegistry::demo();
        for id in MenuId::ALL {
            assert!(content.entry(id).is_some(), "missing entry for {id:?}");
        }
    }

    #[test]
    fn panel_membership_matches_demo_tree() {
        let content = ContentRegistry::demo();
        assert!(content.has_panel(MenuId::Men));
        assert!(content.has_panel(MenuId::Women));
        assert!(content.has_panel(MenuId::Explore));
        assert!(!content.has_panel(MenuId::Sustainability));
        assert!(!content.has_panel(MenuId::Help));
    }

    #[test]
    fn demo_catalog_is_nonempty() {
        let content = ContentRegistry::demo();
        assert!(!content.items().is_empty());
        assert!(content.items().iter().all(|i| !i.name.is_empty()));
    }
}
