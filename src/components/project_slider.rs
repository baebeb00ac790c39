//! Project Slider Component
//!
//! Filter pills, a horizontally scrolling strip of project cards and the
//! previous/next arrows. Cards that do not match the filter stay mounted
//! but hidden so their measurements remain available.

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{
    Debouncer, FilterCategory, ProjectCard, ProjectController, ScrollDirection, SliderMetrics,
    SCROLL_SETTLE,
};
use folio_ui::{ButtonVariant, FilterPills, IconButton};

use crate::context::use_projects;
use crate::theme::CARD_GAP;

const SLIDER_ID: &str = "project-slider";

/// Read the strip's scroll offset, scrollable width and visible width.
async fn measure(container: &MountedData) -> Option<SliderMetrics> {
    let offset = container.get_scroll_offset().await.ok()?;
    let size = container.get_scroll_size().await.ok()?;
    let rect = container.get_client_rect().await.ok()?;
    Some(SliderMetrics::new(offset.x, size.width, rect.size.width))
}

/// Re-measure the strip and recompute the arrows.
async fn refresh_buttons(
    container: Signal<Option<Rc<MountedData>>>,
    mut projects: Signal<ProjectController>,
) {
    let Some(mounted) = container.peek().clone() else {
        return;
    };
    match measure(&mounted).await {
        Some(metrics) => projects.write().update_button_states(metrics),
        None => tracing::debug!("Project strip not measurable yet"),
    }
}

/// Refresh the arrows once the strip has stopped moving.
fn refresh_after_settle(
    debouncer: &Debouncer,
    container: Signal<Option<Rc<MountedData>>>,
    projects: Signal<ProjectController>,
) {
    let debouncer = debouncer.clone();
    spawn(async move {
        if debouncer.settle().await {
            refresh_buttons(container, projects).await;
        }
    });
}

/// Move the host scroll position of the strip.
fn set_scroll_left(offset: f64) {
    let eval = document::eval(&format!(
        "document.getElementById('{SLIDER_ID}').scrollLeft = {offset};"
    ));
    spawn(async move {
        if let Err(e) = eval.await {
            tracing::debug!(offset, "Failed to scroll project strip: {}", e);
        }
    });
}

#[component]
pub fn ProjectSlider(categories: Vec<FilterCategory>) -> Element {
    let mut projects = use_projects();
    let container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let card_refs: Signal<HashMap<usize, Rc<MountedData>>> = use_signal(HashMap::new);
    let debouncer = use_hook(|| Debouncer::new(SCROLL_SETTLE));

    let scroll = move |direction: ScrollDirection| {
        spawn(async move {
            refresh_buttons(container, projects).await;

            let first = projects.peek().visible_indices().first().copied();
            let first_ref = first.and_then(|i| card_refs.peek().get(&i).cloned());
            let width = match first_ref {
                Some(card) => card.get_client_rect().await.ok().map(|r| r.size.width),
                None => None,
            };

            let target = projects.write().scroll_by(direction, width, CARD_GAP);
            set_scroll_left(target);
        });
    };

    let on_filter = {
        let debouncer = debouncer.clone();
        move |tag: String| {
            projects.write().set_filter_tag(&tag);
            set_scroll_left(0.0);
            refresh_after_settle(&debouncer, container, projects);
        }
    };
    let on_scroll = {
        let debouncer = debouncer.clone();
        move |_| refresh_after_settle(&debouncer, container, projects)
    };
    let on_resize = {
        let debouncer = debouncer.clone();
        move |_| refresh_after_settle(&debouncer, container, projects)
    };

    let controller = projects.read();
    let buttons = controller.buttons();
    let active = controller.filter().tag().to_string();
    let cards: Vec<(usize, ProjectCard, bool)> = controller
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| (i, card.clone(), controller.is_visible(i)))
        .collect();
    let none_visible = controller.visible_indices().is_empty();
    drop(controller);

    rsx! {
        FilterPills {
            categories,
            active,
            on_select: on_filter,
        }

        div { class: "project-slider",
            IconButton {
                icon: "fa-solid fa-chevron-left".to_string(),
                variant: ButtonVariant::Slider,
                aria_label: "Previous projects".to_string(),
                disabled: buttons.prev_disabled,
                onclick: move |_| scroll(ScrollDirection::Previous),
            }

            div {
                id: SLIDER_ID,
                class: "project-slider-container",
                onmounted: move |evt: MountedEvent| {
                    let mut container = container;
                    container.set(Some(evt.data()));
                    spawn(refresh_buttons(container, projects));
                },
                onscroll: on_scroll,
                onresize: on_resize,

                div { class: "project-grid",
                    for (index, card, visible) in cards {
                        ProjectCardView { key: "{index}", index, card, visible, card_refs }
                    }
                }

                if none_visible {
                    p { class: "empty-projects", "No projects in this category yet." }
                }
            }

            IconButton {
                icon: "fa-solid fa-chevron-right".to_string(),
                variant: ButtonVariant::Slider,
                aria_label: "Next projects".to_string(),
                disabled: buttons.next_disabled,
                onclick: move |_| scroll(ScrollDirection::Next),
            }
        }
    }
}

/// A single project card. Clicking it opens the project modal, except for
/// clicks on its GitHub link.
#[component]
fn ProjectCardView(
    index: usize,
    card: ProjectCard,
    visible: bool,
    mut card_refs: Signal<HashMap<usize, Rc<MountedData>>>,
) -> Element {
    let mut projects = use_projects();
    let cover = card.cover_image();
    let github = card.github().map(str::to_string);

    rsx! {
        div {
            class: "project-card",
            style: if visible { "display: flex" } else { "display: none" },
            onmounted: move |evt: MountedEvent| {
                card_refs.write().insert(index, evt.data());
            },
            onclick: move |_| projects.write().open_modal(index),

            if let Some(cover) = cover {
                img { src: "{cover}", alt: "{card.title}" }
            }

            div { class: "project-card-body",
                span { class: "project-card-tag", "{card.category}" }
                h3 { "{card.title}" }
                if let Some(url) = github {
                    a {
                        class: "github-link",
                        href: "{url}",
                        target: "_blank",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        i { class: "fa-brands fa-github" }
                        " Code"
                    }
                }
            }
        }
    }
}
