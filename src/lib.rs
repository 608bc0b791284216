//! # foreclosure-dashboard
//!
//! Leptos + WASM dashboard for a foreclosure-case tracking workflow.
//! Talks to the case-tracker HTTP API: scrape court cases per town, browse
//! the results, and run skip-trace lookups with cost estimation.
//!
//! This crate contains pages, components, page state machines, and the REST
//! client. All real work (scraping, persistence, skip-trace providers)
//! happens server-side; this is a presentational client.
//!
//! Browser-only dependencies sit behind the `csr` feature so the default
//! build compiles natively and the state/net test suite runs without a
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// CSR entry point: mounts [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
