//! Browser UI for the media renamer.
//!
//! ARCHITECTURE
//! ============
//! `state` holds plain data with pure transitions, `net` talks to the JSON
//! backend, `pages::renamer_actions` wires the two together, and
//! `components` render it. Everything compiles for SSR too; network and
//! storage helpers degrade to no-ops there.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
