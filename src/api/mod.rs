//! HTTP API handlers

use crate::app::components::layout::{page_title, BOOTSTRAP_CSS, CUSTOM_STYLES, FONT_AWESOME_CSS};
use crate::app::pages::HOME_TITLE;
use crate::app::ServerPage;
use crate::theme::{init_script, settings_element, toggle_script, ThemeSettings};
use axum::{extract::State, response::Html, routing::get, Json, Router};
use dioxus::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<ThemeSettings>,
    pub started: Instant,
}

impl AppState {
    pub fn new(settings: ThemeSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            started: Instant::now(),
        }
    }
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// All routes served by the binary
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/status", get(status_handler))
        .with_state(state)
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "theme-toggle",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// GET / - Server-rendered home page
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.settings))
}

/// Full HTML document for the home page. Head elements are written here
/// because plain SSR has no document to hoist them into, and the page is
/// not hydrated, so the toggle is wired by `toggle_script`.
pub fn render_page(settings: &ThemeSettings) -> String {
    let body = dioxus::ssr::render_element(rsx! {
        ServerPage { settings: settings.clone() }
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script>{init}</script>
<link rel="stylesheet" href="{BOOTSTRAP_CSS}">
<link rel="stylesheet" href="{FONT_AWESOME_CSS}">
<style>{CUSTOM_STYLES}</style>
</head>
<body>
<div id="main">{body}</div>
{settings_json}
<script>{toggle}</script>
</body>
</html>
"#,
        title = page_title(HOME_TITLE),
        init = init_script(settings),
        settings_json = settings_element(settings),
        toggle = toggle_script(settings),
    )
}
