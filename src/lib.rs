//! # medbook-client
//!
//! Leptos + WASM frontend for the MedBook appointment-scheduling service.
//! Patients browse doctors and book free slots; doctors publish and
//! maintain their schedules.
//!
//! The load-bearing pieces are the session store (`state::session`), the
//! auth gateway (`net::auth`), and the navigation guard (`guard`): every
//! route transition is checked against the route table in `routes`, and
//! the token-backed identity is re-derived from the service rather than
//! trusted from any cache.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: mount the application onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
