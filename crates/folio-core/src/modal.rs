//! Project detail modal with an embedded image carousel.
//!
//! Carousel navigation saturates at both ends: stepping past the last image
//! stays on the last image, stepping before the first stays on the first.

use crate::project::ProjectCard;

/// Shown in place of the carousel when a project has no images.
pub const NO_IMAGES_MESSAGE: &str = "No images available.";

/// External link kinds shown in the modal link section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LiveDemo,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::LiveDemo => "Live Demo",
        }
    }

    /// Font Awesome icon class for the link.
    pub fn icon_class(&self) -> &'static str {
        match self {
            LinkKind::GitHub => "fa-brands fa-github",
            LinkKind::LiveDemo => "fa-solid fa-arrow-up-right-from-square",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalLink {
    pub kind: LinkKind,
    pub url: String,
}

/// Text content of the open modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub about: String,
    pub challenges: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub links: Vec<ModalLink>,
}

impl ModalContent {
    pub fn from_card(card: &ProjectCard) -> Self {
        let mut links = Vec::new();
        if let Some(url) = card.github() {
            links.push(ModalLink {
                kind: LinkKind::GitHub,
                url: url.to_string(),
            });
        }
        if let Some(url) = card.live() {
            links.push(ModalLink {
                kind: LinkKind::LiveDemo,
                url: url.to_string(),
            });
        }

        Self {
            title: card.title.clone(),
            about: card.about.clone(),
            challenges: card.challenges.clone(),
            features: card.feature_list(),
            tech: card.tech_list(),
            links,
        }
    }

    /// Whether the features section is shown at all.
    pub fn show_features(&self) -> bool {
        !self.features.is_empty()
    }

    pub fn show_tech(&self) -> bool {
        !self.tech.is_empty()
    }

    pub fn show_links(&self) -> bool {
        !self.links.is_empty()
    }
}

/// What the carousel area displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slide {
    Placeholder(&'static str),
    Image(String),
}

/// Rendered state of the carousel and its navigation controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselView {
    pub slide: Slide,
    /// Both controls are hidden unless there is more than one image
    pub show_controls: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// State of the (single) project modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    images: Vec<String>,
    current_index: usize,
    is_open: bool,
    content: ModalContent,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the modal from `card`, show its first image and open it.
    ///
    /// Overwrites whatever the previous open left behind.
    pub fn open(&mut self, card: &ProjectCard) {
        self.images = card.image_list();
        self.content = ModalContent::from_card(card);
        self.show_image(0);
        self.is_open = true;
    }

    /// Hide the modal. State is kept until the next `open`.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Move to `index`, clamped into the valid image range.
    pub fn show_image(&mut self, index: isize) {
        self.current_index = match self.images.len() {
            0 => 0,
            len => index.clamp(0, len as isize - 1) as usize,
        };
    }

    pub fn next_image(&mut self) {
        self.show_image(self.current_index as isize + 1);
    }

    pub fn previous_image(&mut self) {
        self.show_image(self.current_index as isize - 1);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn carousel(&self) -> CarouselView {
        match self.images.get(self.current_index) {
            None => CarouselView {
                slide: Slide::Placeholder(NO_IMAGES_MESSAGE),
                show_controls: false,
                prev_disabled: true,
                next_disabled: true,
            },
            Some(image) => CarouselView {
                slide: Slide::Image(image.clone()),
                show_controls: self.images.len() > 1,
                prev_disabled: self.current_index == 0,
                next_disabled: self.current_index == self.images.len() - 1,
            },
        }
    }
}
