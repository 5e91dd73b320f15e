//! Theme Toggle
//!
//! Persisted light/dark theme switching for a Bootstrap page.
//!
//! This library provides:
//! - The theme preference model and toggle controller (shared, WASM-safe)
//! - Browser storage and document bindings (WASM only)
//! - Web UI (Dioxus + Bootstrap + Font Awesome)
//! - A small HTTP server rendering the page (server feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Theme preference and controller (shared between server and WASM client)
pub mod theme;

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
