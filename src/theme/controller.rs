//! Theme toggle controller and the capabilities it drives.

use super::{Glyph, Theme, ThemeSettings};
use thiserror::Error;
use tracing::debug;

/// Failure writing the preference. Never surfaced past the controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write: {0}")]
    Rejected(String),
}

/// Synchronous string-keyed store that outlives the page.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Attributes on the document root element.
pub trait ThemeDocument {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
}

/// The toggle control's icon.
pub trait ToggleIcon {
    fn show(&mut self, glyph: Glyph);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<T: ThemeDocument + ?Sized> ThemeDocument for &mut T {
    fn attribute(&self, name: &str) -> Option<String> {
        (**self).attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value)
    }

    fn remove_attribute(&mut self, name: &str) {
        (**self).remove_attribute(name)
    }
}

impl<T: ToggleIcon + ?Sized> ToggleIcon for &mut T {
    fn show(&mut self, glyph: Glyph) {
        (**self).show(glyph)
    }
}

/// Keeps the stored preference, the root marker and the toggle glyph in
/// agreement.
///
/// The marker on the document is the source of truth once the page is
/// initialized: clicks flip whatever the document currently shows, not what
/// the store last held.
pub struct ThemeController<S, D, I> {
    settings: ThemeSettings,
    store: S,
    document: D,
    icon: I,
}

impl<S, D, I> ThemeController<S, D, I>
where
    S: PreferenceStore,
    D: ThemeDocument,
    I: ToggleIcon,
{
    pub fn new(settings: ThemeSettings, store: S, document: D, icon: I) -> Self {
        Self {
            settings,
            store,
            document,
            icon,
        }
    }

    /// Apply the stored preference to the page.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.store.get(&self.settings.storage_key);
        let theme = Theme::from_stored(stored.as_deref());
        debug!(?stored, %theme, "Applying stored theme preference");
        self.apply(theme);
        theme
    }

    /// Flip the theme shown on the page and persist the new choice.
    pub fn on_toggle_click(&mut self) -> Theme {
        let theme = self.current().toggled();
        self.apply(theme);

        // Disabled storage only costs persistence across reloads
        if let Err(e) = self.store.set(&self.settings.storage_key, theme.as_str()) {
            debug!("Theme preference not persisted: {}", e);
        }

        debug!(%theme, "Theme toggled");
        theme
    }

    /// Theme projected by the root marker.
    pub fn current(&self) -> Theme {
        if self.document.attribute(&self.settings.attribute).is_some() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn icon(&self) -> &I {
        &self.icon
    }

    pub fn into_parts(self) -> (S, D, I) {
        (self.store, self.document, self.icon)
    }

    fn apply(&mut self, theme: Theme) {
        match theme {
            Theme::Dark => self
                .document
                .set_attribute(&self.settings.attribute, &self.settings.dark_value),
            Theme::Light => self.document.remove_attribute(&self.settings.attribute),
        }
        self.icon.show(theme.glyph());
    }
}
