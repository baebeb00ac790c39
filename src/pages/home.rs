//! The single portfolio page: header, hero, about, projects, contact and
//! footer, with the project modal layered on top.

use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::{ControlKey, Debouncer, SiteConfig, SCROLL_SETTLE};

use crate::components::{
    schedule_observe, ContactSection, Hero, NavHeader, PageSection, ProjectModal, ProjectSlider,
};
use crate::context::{use_page, use_projects, use_theme};

fn control_key(key: &Key) -> ControlKey {
    match key {
        Key::Escape => ControlKey::Escape,
        _ => ControlKey::Other,
    }
}

#[component]
pub fn Home(site: SiteConfig) -> Element {
    let mut projects = use_projects();
    let theme = use_theme();
    let page = use_page();
    let debouncer = use_hook(|| Debouncer::new(SCROLL_SETTLE));

    let root_class = format!("page-root {}", theme.read().theme().root_class());
    let flipping = page.flip.read().is_flipping();
    let year = chrono::Local::now().year();

    let on_mounted = {
        let debouncer = debouncer.clone();
        move |evt: MountedEvent| {
            let mut main_ref = page.main_ref;
            main_ref.set(Some(evt.data()));
            schedule_observe(&debouncer, page);
        }
    };
    let on_scroll = {
        let debouncer = debouncer.clone();
        move |_| schedule_observe(&debouncer, page)
    };

    rsx! {
        div {
            class: "{root_class}",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt: KeyboardEvent| {
                projects.write().handle_key(control_key(&evt.key()));
            },

            NavHeader { owner: site.owner.clone(), sections: site.sections.clone() }

            main {
                class: if flipping { "page page-flip-out" } else { "page" },
                onmounted: on_mounted,
                onscroll: on_scroll,

                PageSection { id: "home", class: "hero",
                    Hero {
                        owner: site.owner.clone(),
                        words: site.typing_words.clone(),
                        images: site.profile_images.clone(),
                    }
                }

                PageSection { id: "about", class: "about",
                    h2 { class: "section-title", "About Me" }
                    for (i, paragraph) in site.bio.iter().enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                }

                PageSection { id: "projects", class: "projects",
                    h2 { class: "section-title", "Projects" }
                    ProjectSlider { categories: site.categories.clone() }
                }

                PageSection { id: "contact", class: "contact",
                    h2 { class: "section-title", "Contact" }
                    ContactSection { email: site.email.clone() }
                }

                footer { class: "site-footer",
                    p { "\u{00A9} {year} {site.owner}" }
                }
            }

            ProjectModal {}
        }
    }
}
