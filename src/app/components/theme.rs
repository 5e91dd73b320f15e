//! Light/dark theme toggle button.

use dioxus::prelude::*;

use crate::theme::{Glyph, Theme, ThemeSettings, ToggleIcon};

/// Glyph signal driven by the theme controller.
#[derive(Clone, Copy)]
pub struct SignalIcon(pub Signal<Glyph>);

impl ToggleIcon for SignalIcon {
    fn show(&mut self, glyph: Glyph) {
        self.0.set(glyph);
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_controller(
    settings: ThemeSettings,
    glyph: Signal<Glyph>,
) -> crate::theme::ThemeController<
    crate::theme::browser::LocalStorage,
    crate::theme::browser::RootElement,
    SignalIcon,
> {
    crate::theme::ThemeController::new(
        settings,
        crate::theme::browser::LocalStorage::new(),
        crate::theme::browser::RootElement::new(),
        SignalIcon(glyph),
    )
}

/// Toggle button showing the theme a click switches to. Uses localStorage for
/// persistence and the Bootstrap `data-bs-theme` root attribute.
///
/// Settings come from context when an ancestor provides them.
#[component]
pub fn ThemeToggle() -> Element {
    let settings = try_use_context::<ThemeSettings>().unwrap_or_default();
    // Server render has no preference to read; the head script fixes the
    // marker and the mount effect (or the page's toggle script) the glyph.
    let glyph = use_signal(|| Theme::Light.glyph());

    #[cfg(target_arch = "wasm32")]
    let mount_settings = settings.clone();
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            browser_controller(mount_settings.clone(), glyph).initialize();
        }
    });

    #[cfg(target_arch = "wasm32")]
    let click_settings = settings.clone();
    let on_click = move |_: MouseEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            browser_controller(click_settings.clone(), glyph).on_toggle_click();
        }
    };

    let current = glyph();

    rsx! {
        button {
            id: "{settings.toggle_id}",
            class: "btn btn-outline-secondary btn-sm",
            r#type: "button",
            title: current.label(),
            "aria-label": current.label(),
            onclick: on_click,
            i { class: "fas {current.icon_class()}" }
        }
    }
}
