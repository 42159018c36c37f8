//! # kraken-frontend
//!
//! Leptos + WASM frontend for the kraken attack-surface-management platform.
//! Replaces the React + OpenAPI-generator client with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the typed
//! REST client for the kraken backend. Actual network scans are carried out
//! by leeches (worker services) on behalf of the backend; this frontend only
//! registers targets and dispatches attack requests.

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point — hydrates the server-rendered DOM into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
