//! # roomres-ui
//!
//! WASM helper loaded by the server-rendered pages of the room reservation
//! app. It restores and toggles the dark/light theme and surfaces
//! server-rendered error and reservation messages as alerts.
//!
//! The logic lives behind small capability traits (`util::storage`,
//! `util::page`, `util::notify`) so it runs natively under `cargo test`.
//! Browser bindings are compiled only with the `hydrate` feature.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod browser;
