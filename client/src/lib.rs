//! # client
//!
//! Leptos + WASM frontend for CofferCard scratch-card and spin-wheel
//! promotional campaigns.
//!
//! Vendors sign in to manage campaigns, prizes, claims, and company settings;
//! players open a campaign's public link to register and play. The crate is
//! server-rendered by the `coffercard` host (`ssr` feature) and hydrated in the
//! browser (`hydrate` feature). The scratch-card canvas is driven by the
//! `scratch` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    log::info!("hydrating CofferCard");
    leptos::mount::hydrate_body(app::App);
}
