//! # drdent
//!
//! Leptos + WASM Telegram Mini App for booking appointments at the Доктор Дент
//! dental clinic.
//!
//! This crate contains pages, components, host integration, the REST client,
//! and the browser-side glue around the [`booking`] core, which owns the
//! draft, calendar and wizard logic and is tested natively.
//!
//! Browser-only code is gated on the `csr` feature; without it every host and
//! network call degrades to a no-op or `None` so the crate builds and tests on
//! the host toolchain.

pub mod app;
pub mod components;
pub mod config;
pub mod host;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod view_model;

/// Install logging and the panic hook, then mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
