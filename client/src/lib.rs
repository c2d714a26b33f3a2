//! # client
//!
//! Leptos + WASM frontend for ChatKeep: the landing/import screen, email
//! magic-link sign-in, the records dashboard and public share pages.
//!
//! The crate is compiled twice: with `ssr` into the server binary for
//! server-side rendering, and with `hydrate` to WASM for the browser. Network
//! and browser effects only run under `hydrate`; SSR builds compile them to
//! inert stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
