//! End-to-end toggle behavior against in-memory page capabilities.

use theme_toggle::theme::{
    Glyph, MemoryDocument, MemoryIcon, MemoryStore, PreferenceStore, Theme, ThemeController,
    ThemeDocument, ThemeSettings,
};

fn page_load(store: MemoryStore) -> ThemeController<MemoryStore, MemoryDocument, MemoryIcon> {
    let mut controller = ThemeController::new(
        ThemeSettings::default(),
        store,
        MemoryDocument::new(),
        MemoryIcon::new(),
    );
    controller.initialize();
    controller
}

fn marker(controller: &ThemeController<MemoryStore, MemoryDocument, MemoryIcon>) -> Option<String> {
    controller.document().attribute("data-bs-theme")
}

#[test]
fn test_empty_store_click_click() {
    let mut page = page_load(MemoryStore::new());
    assert_eq!(marker(&page), None);
    assert_eq!(page.icon().markup(), r#"<i class="fas fa-moon"></i>"#);

    assert_eq!(page.on_toggle_click(), Theme::Dark);
    assert_eq!(marker(&page).as_deref(), Some("dark"));
    assert_eq!(page.store().get("theme").as_deref(), Some("dark"));
    assert_eq!(page.icon().glyph(), Some(Glyph::Sun));

    assert_eq!(page.on_toggle_click(), Theme::Light);
    assert_eq!(marker(&page), None);
    assert_eq!(page.store().get("theme").as_deref(), Some("light"));
    assert_eq!(page.icon().glyph(), Some(Glyph::Moon));
}

#[test]
fn test_preference_survives_reloads() {
    let mut page = page_load(MemoryStore::new());
    page.on_toggle_click();
    let (store, _, _) = page.into_parts();

    let page = page_load(store);
    assert_eq!(page.current(), Theme::Dark);
    assert_eq!(page.icon().glyph(), Some(Glyph::Sun));

    let mut page = page;
    page.on_toggle_click();
    let (store, _, _) = page.into_parts();

    let page = page_load(store);
    assert_eq!(page.current(), Theme::Light);
    assert_eq!(marker(&page), None);
}

#[test]
fn test_disabled_storage_degrades_to_session_only() {
    let mut page = page_load(MemoryStore::unavailable());
    assert_eq!(page.on_toggle_click(), Theme::Dark);
    assert_eq!(marker(&page).as_deref(), Some("dark"));

    let (store, _, _) = page.into_parts();
    let page = page_load(store);
    assert_eq!(page.current(), Theme::Light);
}
