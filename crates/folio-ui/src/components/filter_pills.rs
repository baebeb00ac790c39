//! Filter Pills Component
//!
//! Row of project filter buttons. Exactly one pill is active: the one whose
//! tag equals the active filter.

use dioxus::prelude::*;
use folio_core::FilterCategory;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub categories: Vec<FilterCategory>,
    /// Tag of the active filter
    pub active: String,
    /// Called with the tag of the clicked pill
    pub on_select: EventHandler<String>,
}

/// CSS class of a pill given whether it is the active one.
pub fn pill_class(is_active: bool) -> &'static str {
    if is_active {
        "filter-btn active"
    } else {
        "filter-btn"
    }
}

/// Displays the filter buttons above the project slider
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         categories: site.categories.clone(),
///         active: projects.read().filter().tag().to_string(),
///         on_select: move |tag: String| projects.write().set_filter_tag(&tag),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "project-filters",
            role: "radiogroup",
            "aria-label": "Project categories",
            for category in props.categories.iter() {
                {
                    let tag = category.tag.clone();
                    let is_active = props.active == category.tag;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{category.tag}",
                            class: pill_class(is_active),
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            onclick: move |_| {
                                tracing::debug!(tag = %tag, "Filter pill clicked");
                                on_select.call(tag.clone());
                            },
                            "{category.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_pill_gets_active_class() {
        assert_eq!(pill_class(true), "filter-btn active");
        assert_eq!(pill_class(false), "filter-btn");
    }
}
