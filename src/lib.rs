//! # taskdeck
//!
//! Leptos + WASM frontend for a to-do list service. Replaces the original
//! Vite + React client with a Rust-native UI layer.
//!
//! The crate is a thin presentational layer around a token-based session
//! core: `state::session` owns the session state machine, `net` wraps the
//! remote REST API, and `util::storage` mirrors credentials to localStorage
//! so a session survives page reloads.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mount the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
