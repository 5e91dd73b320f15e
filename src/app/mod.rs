//! Dioxus application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application, plus the server-rendered page wrapper.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::theme::ThemeSettings;
use pages::Home;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_context_provider(client_settings);

    rsx! {
        Router::<Route> {}
    }
}

/// Settings embedded by the server, so the client reads and writes the same
/// key and attribute as the page's head script.
#[cfg(target_arch = "wasm32")]
fn client_settings() -> ThemeSettings {
    crate::theme::browser::settings_from_page()
}

#[cfg(not(target_arch = "wasm32"))]
fn client_settings() -> ThemeSettings {
    ThemeSettings::default()
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Home page rendered on the server with configured theme settings.
#[component]
pub fn ServerPage(settings: ThemeSettings) -> Element {
    use_context_provider(|| settings.clone());

    rsx! {
        Home {}
    }
}
