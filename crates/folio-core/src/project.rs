//! Project card records.
//!
//! A card is a flat bag of string attributes. List-valued attributes
//! (`images`, `features`, `tech`) are comma-joined and only split when the
//! modal needs them, so a card never fails to load because of a malformed
//! field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Separator used by every list-valued card attribute.
pub const LIST_DELIMITER: char = ',';

/// Link value that marks a link as "not available".
pub const PLACEHOLDER_LINK: &str = "#";

/// A single project shown in the slider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectCard {
    /// Category tag matched against the active filter
    pub category: String,
    pub title: String,
    pub github_link: String,
    pub live_link: String,
    /// Comma-joined image URLs
    pub images: String,
    pub about: String,
    /// Comma-joined feature list
    pub features: String,
    /// Comma-joined technology list
    pub tech: String,
    pub challenges: String,
}

impl ProjectCard {
    /// Build a card from a free-form attribute map.
    ///
    /// Keys use the kebab-case attribute names (`github-link`, `live-link`).
    /// Missing keys become empty strings.
    pub fn from_attributes(attrs: &HashMap<String, String>) -> Self {
        let get = |key: &str| attrs.get(key).cloned().unwrap_or_default();

        Self {
            category: get("category"),
            title: get("title"),
            github_link: get("github-link"),
            live_link: get("live-link"),
            images: get("images"),
            about: get("about"),
            features: get("features"),
            tech: get("tech"),
            challenges: get("challenges"),
        }
    }

    /// Image URLs in source order, blank entries dropped.
    pub fn image_list(&self) -> Vec<String> {
        split_list(&self.images)
    }

    pub fn feature_list(&self) -> Vec<String> {
        split_list(&self.features)
    }

    pub fn tech_list(&self) -> Vec<String> {
        split_list(&self.tech)
    }

    /// First image, used as the card thumbnail.
    pub fn cover_image(&self) -> Option<String> {
        self.image_list().into_iter().next()
    }

    /// GitHub link, if it is set to something other than the placeholder.
    pub fn github(&self) -> Option<&str> {
        usable_link(&self.github_link)
    }

    /// Live demo link, if it is set to something other than the placeholder.
    pub fn live(&self) -> Option<&str> {
        usable_link(&self.live_link)
    }
}

/// Split a comma-joined attribute into its non-blank entries.
///
/// Entries keep their original text; only entries that are empty after
/// trimming are discarded.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER)
        .filter(|item| !item.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn usable_link(link: &str) -> Option<&str> {
    if link.is_empty() || link == PLACEHOLDER_LINK {
        None
    } else {
        Some(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn from_attributes_reads_kebab_keys() {
        let card = ProjectCard::from_attributes(&attrs(&[
            ("category", "web"),
            ("title", "Shop"),
            ("github-link", "https://github.com/me/shop"),
            ("live-link", "#"),
            ("images", "a.jpg,b.jpg"),
        ]));

        assert_eq!(card.category, "web");
        assert_eq!(card.title, "Shop");
        assert_eq!(card.github(), Some("https://github.com/me/shop"));
        assert_eq!(card.live(), None);
        assert_eq!(card.image_list(), vec!["a.jpg", "b.jpg"]);
        assert!(card.about.is_empty());
    }

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
        assert_eq!(split_list("Rust,, Dioxus ,"), vec!["Rust", " Dioxus "]);
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let card: ProjectCard =
            serde_json::from_str(r#"{"title":"Logo","category":"design","liveLink":"https://x.dev"}"#)
                .unwrap();
        assert_eq!(card.title, "Logo");
        assert_eq!(card.live(), Some("https://x.dev"));
        assert_eq!(card.github(), None);
        assert_eq!(card.cover_image(), None);
    }
}
