// src/state/theme.rs

//! Light/dark theme preference.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, Result};
use crate::storage::PreferenceStore;

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

/// Root attribute mirroring the theme for stylesheets.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label of the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(AppError::validation(format!("Unknown theme: {other}"))),
        }
    }
}

/// Attributes set on the document's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Owns the theme, its persisted copy and its reflection on the root.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    store: S,
    root: DocumentRoot,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted theme (dark when unset or unreadable) and apply it.
    ///
    /// Failing to write the preference back is logged, not fatal.
    pub fn new(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, Theme::default());
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme preference: {}", e);
                Theme::default()
            }
        };

        let mut controller = Self {
            theme,
            store,
            root: DocumentRoot::default(),
        };
        controller.mirror();
        if let Err(e) = controller.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Could not persist theme preference: {}", e);
        }
        controller
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.set(self.theme.toggled())?;
        Ok(self.theme)
    }

    /// Persist `theme`, then switch to it. Nothing changes if the write fails.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        self.mirror();
        Ok(())
    }

    fn mirror(&mut self) {
        self.root.set_attribute(THEME_ATTRIBUTE, self.theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryPreferenceStore;

    #[test]
    fn test_defaults_to_dark_and_persists() {
        let store = MemoryPreferenceStore::new();
        let controller = ThemeController::new(&store);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.root().attribute(THEME_ATTRIBUTE), Some("dark"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_reads_persisted_value() {
        let store = MemoryPreferenceStore::with_value(THEME_KEY, "light");
        let controller = ThemeController::new(&store);
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.root().attribute(THEME_ATTRIBUTE), Some("light"));
    }

    #[test]
    fn test_unknown_value_falls_back_to_dark() {
        let store = MemoryPreferenceStore::with_value(THEME_KEY, "sepia");
        let controller = ThemeController::new(&store);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_flips_persists_and_mirrors() {
        let store = MemoryPreferenceStore::new();
        let mut controller = ThemeController::new(&store);

        assert_eq!(controller.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(controller.root().attribute(THEME_ATTRIBUTE), Some("light"));

        assert_eq!(controller.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    /// Store that reads a fixed value and refuses every write.
    struct ReadOnlyStore(Option<&'static str>);

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.0.map(str::to_string))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    #[test]
    fn test_unwritable_store_still_initializes() {
        let controller = ThemeController::new(ReadOnlyStore(Some("light")));
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.root().attribute(THEME_ATTRIBUTE), Some("light"));
    }

    #[test]
    fn test_failed_toggle_changes_nothing() {
        let mut controller = ThemeController::new(ReadOnlyStore(None));
        assert!(controller.toggle().is_err());
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.root().attribute(THEME_ATTRIBUTE), Some("dark"));

        assert!(controller.set(Theme::Light).is_err());
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_labels() {
        assert_eq!(Theme::Dark.toggle_label(), "Light mode");
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
    }
}
