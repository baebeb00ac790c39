//! Navigation plumbing: page-flip scrolling, section observation and the
//! section wrapper that registers itself for both.

use dioxus::document;
use dioxus::prelude::*;
use folio_core::navigation::{flip_scroll_position, visible_ratio, PAGE_FLIP_DURATION};
use folio_core::{Debouncer, NavSection};
use tracing::debug;

use crate::context::{use_page, PageState};

/// Start the page-flip transition toward `href`.
///
/// Links to sections that are not on the page are ignored.
pub fn start_page_flip(page: PageState, href: &str) {
    let mut flip = page.flip;
    let started = flip
        .write()
        .begin(href, |id| page.section_ref(id).is_some());

    let Some(target) = started else {
        debug!(href, "Ignoring navigation to unknown section");
        return;
    };

    spawn(async move {
        tokio::time::sleep(PAGE_FLIP_DURATION).await;
        if scroll_to_section(page, &target).await.is_none() {
            debug!(target = %target, "Could not measure page-flip target");
        }
        flip.write().finish();
    });
}

/// Jump the page so `id` sits just below the fixed header.
async fn scroll_to_section(page: PageState, id: &str) -> Option<()> {
    let section = page.section_ref(id)?;
    let main = page.main_ref.peek().clone()?;

    let rect = section.get_client_rect().await.ok()?;
    let offset = main.get_scroll_offset().await.ok()?;
    let top = flip_scroll_position(rect.origin.y, offset.y);

    let scrolled = document::eval(&format!(
        "document.querySelector('main.page').scrollTo({{ top: {top}, behavior: 'instant' }});"
    ))
    .await;
    if let Err(e) = scrolled {
        debug!(id, top, "Failed to scroll to section: {}", e);
    }
    Some(())
}

/// Measure every registered section against the viewport and update the
/// active nav link and revealed sections.
pub async fn observe_sections(page: PageState) {
    let Some(main) = page.main_ref.peek().clone() else {
        return;
    };
    let Ok(viewport) = main.get_client_rect().await else {
        return;
    };

    let refs = page.section_refs.peek().clone();
    let mut observations = Vec::with_capacity(refs.len());
    for (id, mounted) in refs {
        if let Ok(rect) = mounted.get_client_rect().await {
            let ratio = visible_ratio(rect.origin.y, rect.size.height, viewport.size.height);
            observations.push((id, ratio));
        }
    }

    let mut sections = page.sections;
    let mut next_sections = sections.peek().clone();
    next_sections.update(observations.iter().map(|(id, ratio)| (id.as_str(), *ratio)));
    if *sections.peek() != next_sections {
        debug!(active = next_sections.active(), "Active section changed");
        sections.set(next_sections);
    }

    let mut reveal = page.reveal;
    let mut next_reveal = reveal.peek().clone();
    let mut revealed = false;
    for (id, ratio) in &observations {
        revealed |= next_reveal.observe(id, *ratio);
    }
    if revealed {
        reveal.set(next_reveal);
    }
}

/// Re-observe the sections once scrolling has settled.
pub fn schedule_observe(debouncer: &Debouncer, page: PageState) {
    let debouncer = debouncer.clone();
    spawn(async move {
        if debouncer.settle().await {
            observe_sections(page).await;
        }
    });
}

/// A top-level page section. Registers itself for navigation and fades its
/// content in the first time it scrolls into view.
#[component]
pub fn PageSection(
    id: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let page = use_page();
    let revealed = page.reveal.read().is_shown(&id);
    let section_id = id.clone();

    rsx! {
        section {
            id: "{id}",
            class: "{class}",
            onmounted: move |evt: MountedEvent| page.register_section(&section_id, evt.data()),
            div {
                class: if revealed { "hidden show" } else { "hidden" },
                {children}
            }
        }
    }
}

/// A link to an in-page section, navigated with the page-flip transition.
#[component]
pub fn NavLink(
    section: NavSection,
    class_name: String,
    /// Whether this link takes part in active-section highlighting
    #[props(default = true)]
    highlight: bool,
    #[props(default)] on_navigate: Option<EventHandler<()>>,
) -> Element {
    let page = use_page();
    let href = section.href();
    let active = highlight && page.sections.read().is_active_link(&href);
    let class = if active {
        format!("{} active-link", class_name)
    } else {
        class_name.clone()
    };
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                start_page_flip(page, &target);
                if let Some(handler) = &on_navigate {
                    handler.call(());
                }
            },
            "{section.label}"
        }
    }
}
