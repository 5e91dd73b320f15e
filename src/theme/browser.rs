//! `web-sys` capabilities for the real page.

use super::controller::{PreferenceStore, StoreError, ThemeDocument};
use super::{ThemeSettings, SETTINGS_ELEMENT_ID};
use tracing::warn;

/// Settings the server embedded in the page, or the defaults when the page
/// carries none.
pub fn settings_from_page() -> ThemeSettings {
    let Some(json) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(SETTINGS_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return ThemeSettings::default();
    };

    serde_json::from_str(&json).unwrap_or_else(|e| {
        warn!("Ignoring malformed theme settings: {}", e);
        ThemeSettings::default()
    })
}

/// `window.localStorage`. Storage disabled by policy reads nothing and
/// rejects writes.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

/// `document.documentElement`.
#[derive(Debug, Clone, Default)]
pub struct RootElement {
    root: Option<web_sys::Element>,
}

impl RootElement {
    pub fn new() -> Self {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if root.is_none() {
            warn!("No document root element; theme marker will not be applied");
        }
        Self { root }
    }
}

impl ThemeDocument for RootElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.root.as_ref()?.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = &self.root {
            let _ = root.set_attribute(name, value);
        }
    }

    fn remove_attribute(&mut self, name: &str) {
        if let Some(root) = &self.root {
            let _ = root.remove_attribute(name);
        }
    }
}
