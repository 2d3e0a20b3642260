//! # client
//!
//! Leptos + WASM frontend for the document viewer page.
//!
//! This crate contains the page, its components and the glue that forwards
//! DOM events to the headless `overlay` crate. All viewer state lives in one
//! `RwSignal<PanelCore>` provided by [`app::App`].

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
