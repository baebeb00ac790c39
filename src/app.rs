use std::sync::Arc;

use dioxus::document;
use dioxus::prelude::*;
use folio_core::{MemoryStore, PreferenceStore, Storage, ThemeController};

use crate::context::{get_data_dir, get_site, provide_page_context};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Font Awesome stylesheet for the nav, link and theme icons.
const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Open the preference store, falling back to memory when the database
/// cannot be opened.
fn open_preferences() -> Arc<dyn PreferenceStore> {
    let data_dir = get_data_dir();
    match Storage::in_data_dir(&data_dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!("Failed to open preferences in {:?}: {}", data_dir, e);
            Arc::new(MemoryStore::new())
        }
    }
}

/// Root application component.
///
/// Provides global styles and the page contexts.
#[component]
pub fn App() -> Element {
    let site = use_hook(get_site);
    let theme = use_hook(|| ThemeController::load(open_preferences()));

    provide_page_context(&site, theme);

    rsx! {
        document::Stylesheet { href: ICON_STYLESHEET }
        style { {GLOBAL_STYLES} }
        Home { site }
    }
}
