//! Mobile Navigation Component
//!
//! Drop-down link list shown below the header on narrow screens while the
//! hamburger menu is open.

use dioxus::prelude::*;
use folio_core::NavSection;

use crate::components::nav_header::ThemeToggle;
use crate::components::navigation::NavLink;
use crate::context::use_page;

/// Mobile link list. Following a link closes the menu.
#[component]
pub fn MobileNav(sections: Vec<NavSection>) -> Element {
    let mut menu = use_page().menu;
    let open = menu.read().is_open();

    rsx! {
        nav {
            class: if open { "mobile-nav-links active" } else { "mobile-nav-links" },
            for section in sections.iter() {
                NavLink {
                    key: "{section.id}",
                    section: section.clone(),
                    class_name: "mobile-nav-link".to_string(),
                    highlight: false,
                    on_navigate: move |_| menu.write().close(),
                }
            }
            ThemeToggle {}
        }
    }
}
