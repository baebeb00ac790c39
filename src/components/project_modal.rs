//! Project Modal Component
//!
//! Detail view for a single project: image carousel, links, description,
//! feature and tech lists. Closed by the close button, a click on the dim
//! backdrop, or Escape (handled at the page root).

use dioxus::prelude::*;
use folio_core::{OverlayTarget, Slide};
use folio_ui::CloseButton;

use crate::context::use_projects;

#[component]
pub fn ProjectModal() -> Element {
    let mut projects = use_projects();

    let controller = projects.read();
    let modal = controller.modal();
    let open = modal.is_open();
    let content = modal.content().clone();
    let carousel = modal.carousel();
    drop(controller);

    rsx! {
        div {
            id: "project-modal",
            class: if open { "modal visible" } else { "modal" },
            onclick: move |_| projects.write().handle_overlay_click(OverlayTarget::Scrim),

            div {
                class: "modal-content",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                CloseButton { onclick: move |_| projects.write().close_modal() }

                h2 { id: "modal-title", "{content.title}" }

                div { class: "modal-image-slider",
                    div { class: "slider-inner",
                        match &carousel.slide {
                            Slide::Image(src) => rsx! {
                                img { src: "{src}", alt: "{content.title}" }
                            },
                            Slide::Placeholder(message) => rsx! {
                                p { class: "no-images", "{message}" }
                            },
                        }
                    }

                    if carousel.show_controls {
                        button {
                            class: "slider-nav prev-slide",
                            r#type: "button",
                            "aria-label": "Previous image",
                            disabled: carousel.prev_disabled,
                            onclick: move |_| projects.write().previous_image(),
                            i { class: "fa-solid fa-chevron-left" }
                        }
                        button {
                            class: "slider-nav next-slide",
                            r#type: "button",
                            "aria-label": "Next image",
                            disabled: carousel.next_disabled,
                            onclick: move |_| projects.write().next_image(),
                            i { class: "fa-solid fa-chevron-right" }
                        }
                    }
                }

                if content.show_links() {
                    div { class: "modal-links",
                        for link in content.links.iter() {
                            a {
                                key: "{link.url}",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                i { class: link.kind.icon_class() }
                                " "
                                {link.kind.label()}
                            }
                        }
                    }
                }

                div { class: "modal-section",
                    h3 { "About" }
                    p { "{content.about}" }
                }

                if content.show_features() {
                    div { class: "modal-section",
                        h3 { "Key Features" }
                        ul {
                            for feature in content.features.iter() {
                                li { "{feature}" }
                            }
                        }
                    }
                }

                if content.show_tech() {
                    div { class: "modal-section",
                        h3 { "Tech Stack" }
                        ul { class: "modal-tech",
                            for tech in content.tech.iter() {
                                li { "{tech}" }
                            }
                        }
                    }
                }

                div { class: "modal-section",
                    h3 { "Challenges" }
                    p { "{content.challenges}" }
                }
            }
        }
    }
}
