//! # gradnote-client
//!
//! Leptos + WASM frontend for the GradNote mistake notebook.
//!
//! Pages, layout components and reactive state live here; the wire types,
//! HTTP policy, session transitions and validation come from the `gradnote`
//! core crate. `net::browser` plugs the browser's fetch, `localStorage` and
//! `location` into the core's platform traits.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
