//! Light/dark theme preference and the controller that projects it onto a page.
//!
//! The preference lives in a string-keyed store; the page reflects it through
//! a root element attribute and the toggle control's glyph. Everything that
//! touches the outside world goes through the capability traits in
//! [`controller`], so the logic runs the same in the browser and in tests.
//!
//! # Modules
//! - [`controller`] - capability traits and [`ThemeController`]
//! - [`memory`] - in-memory capabilities for headless use
//! - [`script`] - inline page scripts and the settings data element
//! - `browser` - `web-sys` capabilities (wasm32 only)

pub mod controller;
pub mod memory;
pub mod script;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use controller::{PreferenceStore, StoreError, ThemeController, ThemeDocument, ToggleIcon};
pub use memory::{MemoryDocument, MemoryIcon, MemoryStore};
pub use script::{init_script, settings_element, toggle_script};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The persisted theme preference.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a raw stored value. Only the exact string `"dark"` selects
    /// the dark theme; absent, empty or unknown values are light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Value written to the preference store.
    pub fn as_str(self) -> &'static str {
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

    /// Glyph shown on the toggle while this theme is active. The glyph names
    /// the theme a click switches to.
    pub fn glyph(self) -> Glyph {
        match self {
            Theme::Light => Glyph::Moon,
            Theme::Dark => Glyph::Sun,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon rendered inside the toggle control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Sun,
    Moon,
}

impl Glyph {
    /// Font Awesome icon class.
    pub fn icon_class(self) -> &'static str {
        match self {
            Glyph::Sun => "fa-sun",
            Glyph::Moon => "fa-moon",
        }
    }

    /// Inner markup for the toggle element.
    pub fn markup(self) -> String {
        format!(r#"<i class="fas {}"></i>"#, self.icon_class())
    }

    /// Accessible label describing what a click does.
    pub fn label(self) -> &'static str {
        match self {
            Glyph::Sun => "Switch to light mode",
            Glyph::Moon => "Switch to dark mode",
        }
    }
}

/// Id of the JSON element carrying [`ThemeSettings`] into the page.
pub const SETTINGS_ELEMENT_ID: &str = "theme-settings";

/// Names shared between the stored preference, the page markup and the
/// stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Preference store key
    pub storage_key: String,
    /// Attribute set on the document root while dark
    pub attribute: String,
    /// Attribute value for the dark theme
    pub dark_value: String,
    /// Element id of the toggle control
    pub toggle_id: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-bs-theme".to_string(),
            dark_value: "dark".to_string(),
            toggle_id: "themeToggle".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored_only_exact_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Light);
        for value in ["", "light", "Dark", "DARK", " dark", "dark ", "null", "🌙"] {
            assert_eq!(Theme::from_stored(Some(value)), Theme::Light, "{value:?}");
        }
    }

    #[test]
    fn test_toggled_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_glyph_points_at_the_other_theme() {
        assert_eq!(Theme::Light.glyph(), Glyph::Moon);
        assert_eq!(Theme::Dark.glyph(), Glyph::Sun);
        assert_eq!(Glyph::Sun.markup(), r#"<i class="fas fa-sun"></i>"#);
        assert_eq!(Glyph::Moon.markup(), r#"<i class="fas fa-moon"></i>"#);
    }

    #[test]
    fn test_theme_display_matches_stored_value() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_settings_partial_override_keeps_defaults() {
        let settings: ThemeSettings =
            serde_json::from_str(r#"{"storage_key": "site-theme"}"#).unwrap();
        assert_eq!(settings.storage_key, "site-theme");
        assert_eq!(settings.attribute, "data-bs-theme");
        assert_eq!(settings.toggle_id, "themeToggle");
    }
}
