//! Page state shared with every component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_page_context(site, store);
//!
//! // In child components
//! let mut projects = use_projects();
//! projects.write().set_filter_tag("web");
//! ```

use std::path::PathBuf;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{
    ContactClient, MobileMenu, PageFlip, ProjectController, RevealTracker, SectionTracker,
    SiteConfig, ThemeController,
};

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the site content loaded at startup.
pub fn get_site() -> SiteConfig {
    crate::get_site()
}

/// Navigation state of the page plus handles to the rendered sections.
///
/// Every field is a signal, so the struct is `Copy` and can move into any
/// event handler.
#[derive(Clone, Copy)]
pub struct PageState {
    pub sections: Signal<SectionTracker>,
    pub reveal: Signal<RevealTracker>,
    pub menu: Signal<MobileMenu>,
    pub flip: Signal<PageFlip>,
    /// Mounted sections in page order
    pub section_refs: Signal<Vec<(String, Rc<MountedData>)>>,
    /// The scrolling `main` element
    pub main_ref: Signal<Option<Rc<MountedData>>>,
}

impl PageState {
    fn new() -> Self {
        Self {
            sections: Signal::new(SectionTracker::new()),
            reveal: Signal::new(RevealTracker::new()),
            menu: Signal::new(MobileMenu::default()),
            flip: Signal::new(PageFlip::default()),
            section_refs: Signal::new(Vec::new()),
            main_ref: Signal::new(None),
        }
    }

    /// Remember a mounted section, replacing an earlier mount of the same id.
    pub fn register_section(mut self, id: &str, mounted: Rc<MountedData>) {
        let mut refs = self.section_refs.write();
        match refs.iter_mut().find(|(existing, _)| existing == id) {
            Some(entry) => entry.1 = mounted,
            None => refs.push((id.to_string(), mounted)),
        }
    }

    pub fn section_ref(&self, id: &str) -> Option<Rc<MountedData>> {
        self.section_refs
            .peek()
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, mounted)| mounted.clone())
    }
}

/// Provide every page-level context. Call once from the root component.
pub fn provide_page_context(site: &SiteConfig, theme: ThemeController) {
    let projects = site.projects.clone();
    let action = site.form_action.clone();

    use_context_provider(|| Signal::new(ProjectController::new(projects)));
    use_context_provider(|| Signal::new(theme));
    use_context_provider(PageState::new);
    use_context_provider(|| ContactClient::new(action));
}

/// Hook to access the project slider/filter/modal controller.
pub fn use_projects() -> Signal<ProjectController> {
    use_context::<Signal<ProjectController>>()
}

/// Hook to access the theme controller.
pub fn use_theme() -> Signal<ThemeController> {
    use_context::<Signal<ThemeController>>()
}

/// Hook to access navigation state and section handles.
pub fn use_page() -> PageState {
    use_context::<PageState>()
}

/// Hook to access the contact form client.
pub fn use_contact_client() -> ContactClient {
    use_context::<ContactClient>()
}
