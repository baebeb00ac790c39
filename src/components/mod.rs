//! UI Components for the portfolio page.

mod contact_section;
mod hero;
mod mobile_nav;
mod nav_header;
mod navigation;
mod project_modal;
mod project_slider;

pub use contact_section::ContactSection;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use navigation::{schedule_observe, PageSection};
pub use project_modal::ProjectModal;
pub use project_slider::ProjectSlider;
