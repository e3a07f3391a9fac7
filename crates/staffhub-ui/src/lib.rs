#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! StaffHub HRMS web client.
//!
//! The crate splits along the wasm boundary: [`core`] holds the DOM-free
//! access-control logic (session resolution, route-guard decision, response
//! classification) so it tests on the host, while `app`, `components`, and
//! `services` hold the Yew shell, views, and HTTP clients and only build for
//! `wasm32`.

pub mod core;
pub mod models;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
