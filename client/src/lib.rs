//! # cohort-ui
//!
//! Leptos + WASM frontend for the Cohort peer-learning intranet portal.
//!
//! This crate contains pages, components, application state, the network
//! gateway, and the local fallback store. The gateway prefers the remote
//! `/api` service and transparently degrades to `localStorage`-persisted
//! data when the server is unreachable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod store;
pub mod util;

/// Hydrate entry point, called from the generated JS glue.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
