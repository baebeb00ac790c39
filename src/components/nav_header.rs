//! Navigation Header Component
//!
//! Desktop: fixed header with the owner's name, section links and the
//! theme toggle.
//! Mobile: the links collapse behind a hamburger button (see MobileNav).

use dioxus::prelude::*;
use folio_core::NavSection;
use folio_ui::{ButtonVariant, IconButton};

use crate::components::mobile_nav::MobileNav;
use crate::components::navigation::{start_page_flip, NavLink};
use crate::context::{use_page, use_theme};

/// Light/dark toggle. Every instance shares the same theme state.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let icon = theme.read().theme().toggle_icon().to_string();

    rsx! {
        IconButton {
            icon,
            variant: ButtonVariant::Ghost,
            class: "theme-toggle-btn".to_string(),
            aria_label: "Toggle dark mode".to_string(),
            onclick: move |_| {
                let now = theme.write().toggle();
                tracing::info!(theme = %now, "Theme toggled");
            },
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader(owner: String, sections: Vec<NavSection>) -> Element {
    let page = use_page();
    let mut menu = page.menu;
    let icon = menu.read().icon_class().to_string();
    let home_href = sections.first().map(NavSection::href).unwrap_or_default();
    let flip_target = home_href.clone();

    rsx! {
        header { class: "site-header",
            a {
                class: "logo",
                href: "{home_href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    start_page_flip(page, &flip_target);
                },
                "{owner}"
            }

            nav {
                ul { class: "nav-links",
                    for section in sections.iter() {
                        li { key: "{section.id}",
                            NavLink {
                                section: section.clone(),
                                class_name: "nav-link".to_string(),
                            }
                        }
                    }
                    li { ThemeToggle {} }
                }
            }

            IconButton {
                icon,
                variant: ButtonVariant::Ghost,
                class: "hamburger-menu".to_string(),
                aria_label: "Open menu".to_string(),
                onclick: move |_| menu.write().toggle(),
            }
        }

        MobileNav { sections: sections.clone() }
    }
}
