//! Home page component.
//!
//! Demonstrates the toggle against stock Bootstrap components, which follow
//! the `data-bs-theme` root attribute.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// Title of the home page.
pub const HOME_TITLE: &str = "Home";

/// Home page component.
#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { title: HOME_TITLE,
            h1 { class: "mb-3", "Light or dark" }
            p { class: "lead",
                "Use the button in the navigation bar to switch themes. "
                "Your choice is stored in this browser and restored on the next visit."
            }
            div { class: "row g-3",
                div { class: "col-md-6",
                    div { class: "card h-100",
                        div { class: "card-body",
                            h5 { class: "card-title", "Stored preference" }
                            p { class: "card-text",
                                "Kept under a single localStorage key. "
                                "Anything other than dark means light."
                            }
                        }
                    }
                }
                div { class: "col-md-6",
                    div { class: "card h-100",
                        div { class: "card-body",
                            h5 { class: "card-title", "Page marker" }
                            p { class: "card-text",
                                "The root element carries "
                                code { "data-bs-theme=\"dark\"" }
                                " only while the dark theme is active."
                            }
                        }
                    }
                }
            }
        }
    }
}
