//! # client
//!
//! Leptos frontend for the CareCompanion elder-care dashboard.
//!
//! This crate contains pages, components, the client-side session model and
//! page state. It is compiled twice: with `ssr` into the server binary and
//! with `hydrate` into the browser WASM bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
