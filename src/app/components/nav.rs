//! Navigation bar using Bootstrap.

use dioxus::prelude::*;

use super::theme::ThemeToggle;

/// Navbar with the site brand and the theme toggle.
#[component]
pub fn Nav() -> Element {
    rsx! {
        nav { class: "navbar bg-body-tertiary",
            div { class: "container",
                a { class: "navbar-brand fw-bold", href: "/", "Theme Toggle" }
                div { class: "d-flex align-items-center",
                    ThemeToggle {}
                }
            }
        }
    }
}
