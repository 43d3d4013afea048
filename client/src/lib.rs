//! # shopsearch-client
//!
//! Leptos + WASM frontend for TikTok Shop AI search. A user types a query,
//! the client posts it to the chat backend, and the answer is rendered next to
//! a grid of matched product cards.
//!
//! Built with `hydrate` for the browser and `ssr` for the host server.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install console logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
