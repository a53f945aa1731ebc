//! Family tree page rendering
//!
//! Loads a family tree with a precomputed layout, renders it as a
//! self-contained HTML page and drives hover highlighting of each
//! individual's families.

pub mod core;

pub use crate::core::config;
pub use crate::core::get_version;
