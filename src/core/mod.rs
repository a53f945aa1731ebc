//! Core library: chart model, rendering and hover highlighting

pub mod chart;
pub mod config;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod models;
pub mod render;

/// Returns the current version of the `family-tree-page` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
