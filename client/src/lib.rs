//! # client
//!
//! Leptos + WASM front end for the card QA editor.
//!
//! This crate holds the page, its form components, and the HTTP helpers that
//! feed backend responses into the shared `cards::EditorSession`. Build with
//! the `csr` feature to mount the app in the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
