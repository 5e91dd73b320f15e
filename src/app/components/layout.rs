//! Layout component wrapping all pages with Bootstrap and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::theme::{init_script, ThemeSettings};

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// CSS styles for the application (extends Bootstrap).
pub const CUSTOM_STYLES: &str = r#"
body { min-height: 100vh; }
#themeToggle { width: 2.25rem; }
[data-bs-theme="dark"] .navbar { border-bottom: 1px solid var(--bs-border-color); }
"#;

/// Browser tab title for a page.
pub fn page_title(title: &str) -> String {
    format!("{} - Theme Toggle", title)
}

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let settings = try_use_context::<ThemeSettings>().unwrap_or_default();
    let full_title = page_title(&props.title);
    let script = init_script(&settings);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Style { {CUSTOM_STYLES} }
        // Theme init runs immediately (no DOM needed) to prevent flash
        document::Script { {script} }

        header { Nav {} }
        main { class: "container py-4",
            {props.children}
        }
    }
}
