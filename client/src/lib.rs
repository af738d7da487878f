//! # spritepad
//!
//! Leptos + WASM host for the sprite placement editor.
//!
//! The `canvas` crate owns the editing session and draws the scene; this crate
//! builds the page around it (toolbar, scrollbars, canvas element), loads the
//! sprite sheet, and forwards DOM events to `canvas::engine::Engine`.
//!
//! `state` and `util` are plain Rust and build on any target. The components
//! and the WASM entry point are compiled only with the `csr` feature.

// Leptos #[component] functions return `impl IntoView`.
#![allow(clippy::must_use_candidate)]

pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
