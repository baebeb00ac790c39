//! Folio Core Library
//!
//! Behavior of a single-page portfolio, independent of any rendering
//! surface.
//!
//! ## Overview
//!
//! The page is a set of small state machines. The host (the desktop app)
//! measures the rendered page, feeds events in and renders whatever state
//! comes out:
//!
//! - **Project slider**: category filter, arrow enablement and arrow
//!   scrolling over a horizontally scrolling strip of cards
//! - **Project modal**: detail view with a saturating image carousel
//! - **Hero**: typing subtitle and rotating profile picture
//! - **Navigation**: active-section highlighting, reveal-on-scroll, mobile
//!   menu and the page-flip transition
//! - **Theme**: light/dark toggle persisted in redb
//! - **Contact**: form submission over HTTP
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{ProjectController, SiteConfig, SliderMetrics};
//!
//! let site = SiteConfig::bundled()?;
//! let mut projects = ProjectController::new(site.projects);
//!
//! projects.set_filter_tag("web");
//! projects.update_button_states(SliderMetrics::new(0.0, 1400.0, 600.0));
//! assert!(projects.buttons().prev_disabled);
//!
//! projects.open_modal(projects.visible_indices()[0]);
//! projects.next_image();
//! ```

pub mod config;
pub mod contact;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod modal;
pub mod navigation;
pub mod project;
pub mod rotation;
pub mod slider;
pub mod storage;
pub mod theme;
pub mod typing;

// Re-exports
pub use config::{FilterCategory, NavSection, SiteConfig};
pub use contact::{ContactClient, ContactFields, FormStatus};
pub use controller::{ControlKey, OverlayTarget, ProjectController};
pub use debounce::{Debouncer, Ticket, SCROLL_SETTLE};
pub use error::{FolioError, FolioResult};
pub use filter::{Filter, ALL_TAG};
pub use modal::{CarouselView, LinkKind, ModalContent, ModalLink, ModalState, Slide};
pub use navigation::{MobileMenu, PageFlip, RevealTracker, SectionTracker};
pub use project::ProjectCard;
pub use rotation::ImageRotation;
pub use slider::{ButtonStates, ScrollDirection, SliderMetrics};
pub use storage::{MemoryStore, PreferenceStore, Storage};
pub use theme::{Theme, ThemeController};
pub use typing::{TypingEffect, TypingFrame};
