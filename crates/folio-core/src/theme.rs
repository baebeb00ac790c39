//! Light/dark theme, persisted across sessions.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::storage::PreferenceStore;

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Class applied to the page root in dark mode.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything but `"dark"` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class for the page root element.
    pub fn root_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => DARK_MODE_CLASS,
        }
    }

    /// Icon for the toggle buttons: a sun offers light mode, a moon dark.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "fa-solid fa-moon",
            Theme::Dark => "fa-solid fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Clone)]
pub struct ThemeController {
    theme: Theme,
    store: Arc<dyn PreferenceStore>,
}

impl ThemeController {
    /// Load the saved theme. Store failures fall back to light.
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let saved = match store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read saved theme: {}", e);
                None
            }
        };

        Self {
            theme: Theme::from_stored(saved.as_deref()),
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
        self.theme
    }
}

impl PartialEq for ThemeController {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn absent_value_defaults_to_light() {
        let controller = ThemeController::load(Arc::new(MemoryStore::new()));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    }

    #[test]
    fn toggle_persists_each_change() {
        let store = Arc::new(MemoryStore::new());
        let mut controller = ThemeController::load(store.clone());

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reloaded = ThemeController::load(store.clone());
        assert_eq!(reloaded.theme(), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_state() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "light").unwrap();
        let mut controller = ThemeController::load(store.clone());
        let before = (controller.theme().root_class(), controller.theme().toggle_icon());

        controller.toggle();
        assert_eq!(controller.theme().root_class(), DARK_MODE_CLASS);
        assert_eq!(controller.theme().toggle_icon(), "fa-solid fa-sun");
        controller.toggle();

        let after = (controller.theme().root_class(), controller.theme().toggle_icon());
        assert_eq!(before, after);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }
}
