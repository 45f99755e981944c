//! # country-explorer
//!
//! Leptos + WASM client for browsing country data with user accounts and
//! favorites.
//!
//! The crate is built around the session core in [`state::session`]: it
//! restores a persisted bearer token, validates it against the identity
//! service, keeps the favorites collection written through to browser
//! storage, and publishes consistent snapshots to every mounted component
//! through [`state::context`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging, build the session, mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::{App, build_session};
    use crate::config::{ClientConfig, DEFAULT_LOG_LEVEL};

    console_error_panic_hook::set_once();

    let config = ClientConfig::from_env();
    let level = config.as_ref().map_or(DEFAULT_LOG_LEVEL, |c| c.log_level);
    let _ = console_log::init_with_level(level);
    let config = config.unwrap_or_else(|e| {
        log::warn!("config: {e}; using defaults");
        ClientConfig::default()
    });
    log::info!("country-explorer starting (auth service {})", config.auth_base_url);

    let session = build_session(&config);
    leptos::mount::mount_to_body(move || view! { <App session/> });
}
