//! # client
//!
//! Leptos + WASM frontend for the BAHO healthcare marketing site.
//! One page: hero, animated impact statistics, services grid, and the
//! chat widget that talks to the server's `/api/chat` endpoint.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
