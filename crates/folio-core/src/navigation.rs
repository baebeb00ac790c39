//! In-page navigation: active link highlighting, reveal-on-scroll, the
//! mobile hamburger menu and the page-flip transition.

use std::collections::HashSet;
use std::time::Duration;

/// Visible fraction at which a section becomes the active one.
pub const SECTION_THRESHOLD: f64 = 0.4;
/// Visible fraction at which a hidden element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Height of the fixed header subtracted from page-flip scroll targets.
pub const HEADER_HEIGHT: f64 = 70.0;
/// Length of the flip-out animation.
pub const PAGE_FLIP_DURATION: Duration = Duration::from_millis(600);

/// Fraction of an element's box inside a viewport `[0, viewport_height]`.
///
/// `top` is relative to the viewport. Zero-height boxes are never visible.
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Tracks which section the nav bar highlights.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTracker {
    active: String,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a batch of `(section_id, visible_ratio)` observations.
    ///
    /// The last intersecting section wins. A batch with no intersecting
    /// section clears the highlight.
    pub fn update<'a>(&mut self, observations: impl IntoIterator<Item = (&'a str, f64)>) {
        self.active = observations
            .into_iter()
            .filter(|(_, ratio)| *ratio >= SECTION_THRESHOLD)
            .last()
            .map(|(id, _)| id.to_string())
            .unwrap_or_default();
    }

    /// Id of the highlighted section, empty when none.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether a nav link with `href` (e.g. `#projects`) is highlighted.
    pub fn is_active_link(&self, href: &str) -> bool {
        href.strip_prefix('#') == Some(self.active.as_str())
    }
}

/// Elements that have been revealed. Once revealed they stay revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    shown: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation. Returns true when this call revealed `id`.
    pub fn observe(&mut self, id: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD || self.shown.contains(id) {
            return false;
        }
        self.shown.insert(id.to_string())
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.contains(id)
    }
}

/// Hamburger menu for narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Font Awesome icon for the hamburger button.
    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fa-solid fa-times"
        } else {
            "fa-solid fa-bars"
        }
    }
}

/// Page-flip transition between in-page sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageFlip {
    target: Option<String>,
}

impl PageFlip {
    /// Start flipping toward `href` if it is an in-page link to an existing
    /// section. Returns the target id when the flip started.
    pub fn begin(&mut self, href: &str, target_exists: impl Fn(&str) -> bool) -> Option<String> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() || !target_exists(id) {
            return None;
        }
        self.target = Some(id.to_string());
        self.target.clone()
    }

    /// Whether the flip-out class is applied.
    pub fn is_flipping(&self) -> bool {
        self.target.is_some()
    }

    /// Finish the flip, returning the target that was flipped to.
    pub fn finish(&mut self) -> Option<String> {
        self.target.take()
    }
}

/// Scroll position that puts a section's top just below the fixed header.
///
/// `target_top` is relative to the viewport, `scroll_y` is the current page
/// scroll offset.
pub fn flip_scroll_position(target_top: f64, scroll_y: f64) -> f64 {
    (target_top + scroll_y - HEADER_HEIGHT).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_ratio_partial_and_offscreen() {
        assert_eq!(visible_ratio(0.0, 100.0, 800.0), 1.0);
        assert_eq!(visible_ratio(-50.0, 100.0, 800.0), 0.5);
        assert_eq!(visible_ratio(750.0, 100.0, 800.0), 0.5);
        assert_eq!(visible_ratio(900.0, 100.0, 800.0), 0.0);
        assert_eq!(visible_ratio(10.0, 0.0, 800.0), 0.0);
    }

    #[test]
    fn last_intersecting_section_wins() {
        let mut tracker = SectionTracker::new();
        tracker.update([("home", 0.5), ("about", 0.1), ("projects", 0.45)]);
        assert_eq!(tracker.active(), "projects");
        assert!(tracker.is_active_link("#projects"));
        assert!(!tracker.is_active_link("#home"));

        tracker.update([("home", 0.2)]);
        assert_eq!(tracker.active(), "");
        assert!(!tracker.is_active_link("#projects"));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut reveal = RevealTracker::new();
        assert!(!reveal.observe("skills", 0.1));
        assert!(reveal.observe("skills", 0.2));
        assert!(!reveal.observe("skills", 0.9));
        reveal.observe("skills", 0.0);
        assert!(reveal.is_shown("skills"));
    }

    #[test]
    fn mobile_menu_icon_follows_state() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.icon_class(), "fa-solid fa-bars");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon_class(), "fa-solid fa-times");
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn page_flip_only_for_existing_in_page_targets() {
        let sections = ["home", "contact"];
        let exists = |id: &str| sections.contains(&id);
        let mut flip = PageFlip::default();

        assert_eq!(flip.begin("https://example.com", exists), None);
        assert_eq!(flip.begin("#missing", exists), None);
        assert_eq!(flip.begin("#", exists), None);
        assert!(!flip.is_flipping());

        assert_eq!(flip.begin("#contact", exists), Some("contact".to_string()));
        assert!(flip.is_flipping());
        assert_eq!(flip.finish(), Some("contact".to_string()));
        assert!(!flip.is_flipping());
    }

    #[test]
    fn flip_position_accounts_for_header() {
        assert_eq!(flip_scroll_position(400.0, 1000.0), 1330.0);
        assert_eq!(flip_scroll_position(20.0, 0.0), 0.0);
    }
}
