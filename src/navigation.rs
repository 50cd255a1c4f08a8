//! # Navigation
//!
//! The single-page layout: which sections exist, where a nav click scrolls to,
//! and which section the header highlights for a given scroll position.
//!
//! Positions are plain page coordinates (`f64`, top of the document is 0).

use std::fmt;

/// Height of the fixed header. Scroll targets land this far above a section.
pub const HEADER_OFFSET: f64 = 80.0;

/// Scroll depth past which the header switches to its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Menu,
    Order,
    Cart,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Menu,
        SectionId::Order,
        SectionId::Cart,
        SectionId::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Menu => "menu",
            SectionId::Order => "order",
            SectionId::Cart => "cart",
            SectionId::Contact => "contact",
        }
    }

    /// Nav link text.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Menu => "Menu",
            SectionId::Order => "Order",
            SectionId::Cart => "Cart",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Scroll geometry for a header of a given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigator {
    header_offset: f64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(HEADER_OFFSET)
    }
}

impl Navigator {
    pub fn new(header_offset: f64) -> Self {
        Self {
            header_offset: header_offset.max(0.0),
        }
    }

    pub fn header_offset(&self) -> f64 {
        self.header_offset
    }

    /// Where to scroll so a section starting at `offset_top` sits just below
    /// the header. Never negative.
    pub fn scroll_target(&self, offset_top: f64) -> f64 {
        (offset_top - self.header_offset).max(0.0)
    }

    /// The section to highlight at `scroll_y`.
    ///
    /// `layout` lists each section with its top coordinate, in document order.
    /// The active section is the last one whose top has passed under the
    /// header; above the first section, the first one is active. An empty
    /// layout has no active section.
    pub fn active_section(&self, scroll_y: f64, layout: &[(SectionId, f64)]) -> Option<SectionId> {
        let line = scroll_y + self.header_offset;
        layout
            .iter()
            .rev()
            .find(|(_, top)| *top <= line)
            .or_else(|| layout.first())
            .map(|(section, _)| *section)
    }
}

pub fn scroll_target(offset_top: f64) -> f64 {
    Navigator::default().scroll_target(offset_top)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Count shown on the nav cart badge; `None` hides the badge.
pub fn cart_badge(item_count: u32) -> Option<u32> {
    (item_count > 0).then_some(item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<(SectionId, f64)> {
        vec![
            (SectionId::Hero, 0.0),
            (SectionId::About, 900.0),
            (SectionId::Menu, 1600.0),
            (SectionId::Order, 3000.0),
            (SectionId::Cart, 3800.0),
            (SectionId::Contact, 4500.0),
        ]
    }

    #[test]
    fn test_scroll_target_clears_header() {
        assert_eq!(scroll_target(900.0), 820.0);
        assert_eq!(scroll_target(30.0), 0.0);
        assert_eq!(Navigator::new(64.0).scroll_target(100.0), 36.0);
    }

    #[test]
    fn test_active_section() {
        let nav = Navigator::default();
        let layout = layout();

        assert_eq!(nav.active_section(0.0, &layout), Some(SectionId::Hero));
        assert_eq!(nav.active_section(819.0, &layout), Some(SectionId::Hero));
        assert_eq!(nav.active_section(820.0, &layout), Some(SectionId::About));
        assert_eq!(nav.active_section(3750.0, &layout), Some(SectionId::Cart));
        assert_eq!(nav.active_section(10_000.0, &layout), Some(SectionId::Contact));
    }

    #[test]
    fn test_active_section_above_first() {
        let nav = Navigator::default();
        let layout = [(SectionId::About, 500.0), (SectionId::Menu, 1200.0)];
        assert_eq!(nav.active_section(0.0, &layout), Some(SectionId::About));
        assert_eq!(nav.active_section(0.0, &[]), None);
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_labels_and_badge() {
        let labels: Vec<_> = SectionId::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About", "Menu", "Order", "Cart", "Contact"]);
        assert_eq!(SectionId::from_id("cart"), Some(SectionId::Cart));
        assert_eq!(SectionId::from_id("footer"), None);

        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(3), Some(3));
    }
}
