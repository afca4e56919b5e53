//! # tradingagents-web
//!
//! Leptos + WASM frontend for the TradingAgents stock-analysis service.
//! Replaces the Vue + Element Plus web client with a Rust-native UI layer.
//!
//! This crate contains the route table, pages, shared UI components, the
//! notification state, and the HTTP access layer that talks to the
//! TradingAgents API under `/api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
