//! # booking-admin
//!
//! Leptos + WASM routing and authentication glue for the booking admin UI.
//!
//! This crate contains the admin session (token, profile, login/logout/check),
//! the route table with its auth guard, the REST client for the admin
//! endpoints, and the pages that tie them together.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init(config::AppConfig::from_env().log_level);
    leptos::mount::hydrate_body(app::App);
}
