//! Dioxus page components.

mod home;

pub use home::{Home, HOME_TITLE};
