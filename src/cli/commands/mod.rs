//! CLI command handlers for `familytreepage`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod hover;
pub mod render;

use family_tree_page::core::chart::Chart;
use logger::{error, info, warn};
use std::path::Path;

/// Load a chart file, warning about links to missing entities
pub fn load_chart(input_file: &Path) -> Result<Chart, String> {
    let chart = Chart::load(input_file).map_err(|e| {
        error!("Failed to load chart {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!(
        "Chart loaded: {} ({} individuals, {} families)",
        input_file.display(),
        chart.tree.individual_count(),
        chart.tree.family_count()
    );

    for reference in chart.tree.dangling_references() {
        warn!("{}: {reference}; link skipped", input_file.display());
    }

    Ok(chart)
}
