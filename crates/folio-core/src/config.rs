//! Site content configuration.
//!
//! Everything the page shows that is not layout: the owner, hero words,
//! profile images, contact details, nav sections, filter categories and the
//! project cards. A default site is bundled; a JSON file can replace it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FolioResult;
use crate::filter::ALL_TAG;
use crate::project::ProjectCard;

const BUNDLED_SITE: &str = include_str!("../assets/site.json");

/// An in-page section reachable from the nav bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// A filter button above the project slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCategory {
    pub tag: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub owner: String,
    /// Paragraphs of the About section
    pub bio: Vec<String>,
    /// Words cycled by the hero typing effect
    pub typing_words: Vec<String>,
    pub profile_images: Vec<String>,
    pub email: String,
    /// Form endpoint the contact form posts to
    pub form_action: String,
    pub sections: Vec<NavSection>,
    pub categories: Vec<FilterCategory>,
    pub projects: Vec<ProjectCard>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            bio: Vec::new(),
            typing_words: Vec::new(),
            profile_images: Vec::new(),
            email: String::new(),
            form_action: String::new(),
            sections: Vec::new(),
            categories: vec![FilterCategory {
                tag: ALL_TAG.to_string(),
                label: "All".to_string(),
            }],
            projects: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// The site compiled into the binary.
    pub fn bundled() -> FolioResult<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    pub fn from_json(json: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a site description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }
}
