//! Error types for chart loading and page rendering

use crate::core::models::{FamilyId, IndividualId};
use std::path::PathBuf;

/// Failure while loading a chart or building its relationship index
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// The chart file could not be read
    #[error("failed to read chart {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The chart file is not valid TOML or does not match the chart schema
    #[error("invalid chart file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two individuals share an id
    #[error("duplicate individual id '{0}'")]
    DuplicateIndividual(IndividualId),

    /// Two families share an id
    #[error("duplicate family id '{0}'")]
    DuplicateFamily(FamilyId),

    /// An entity was declared with an empty id
    #[error("empty {0} id")]
    EmptyId(&'static str),
}

/// Failure while producing or writing a rendered page
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The page template failed to render
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// The highlight lookup could not be serialized
    #[error("failed to serialize highlight index: {0}")]
    Lookup(#[from] serde_json::Error),

    /// The page could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
