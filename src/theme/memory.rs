//! In-memory capabilities for running the controller without a browser.

use super::controller::{PreferenceStore, StoreError, ThemeDocument, ToggleIcon};
use super::Glyph;
use std::collections::HashMap;

/// Preference store backed by a map. An unavailable store rejects every
/// write and reads nothing, like storage disabled by browser policy.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    available: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
            writes: 0,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Number of accepted writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Root element attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    attributes: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeDocument for MemoryDocument {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}

/// Remembers the last glyph shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryIcon {
    glyph: Option<Glyph>,
}

impl MemoryIcon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }

    pub fn markup(&self) -> String {
        self.glyph.map(Glyph::markup).unwrap_or_default()
    }
}

impl ToggleIcon for MemoryIcon {
    fn show(&mut self, glyph: Glyph) {
        self.glyph = Some(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites_single_value() {
        let mut store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_unavailable_store_rejects_writes() {
        let mut store = MemoryStore::unavailable();
        assert_eq!(store.set("theme", "dark"), Err(StoreError::Unavailable));
        assert_eq!(store.get("theme"), None);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_icon_markup() {
        let mut icon = MemoryIcon::new();
        assert_eq!(icon.markup(), "");
        icon.show(Glyph::Moon);
        assert_eq!(icon.markup(), r#"<i class="fas fa-moon"></i>"#);
    }
}
