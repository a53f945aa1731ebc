//! Render command handler
//!
//! Loads a chart file and writes it as a self-contained HTML page.

use super::load_chart;
use family_tree_page::config::Config;
use family_tree_page::core::render::{
    ChartIndex, Diagram, DiagramSummary, HtmlRenderer, RenderContext,
};
use logger::{error, info, verbose};
use std::fs;
use std::path::{Path, PathBuf};

/// Run the render command. Returns `false` when the page was not written.
///
/// `title` replaces the chart's own title and the configured default.
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    title: Option<&str>,
    config: &Config,
) -> bool {
    match render_chart(input_file, output_file, title, config) {
        Ok((path, summary)) => {
            println!("✓ Page written: {}", path.display());
            print_summary(&summary);
            true
        }
        Err(err) => {
            error!("Rendering failed for {}: {err}", input_file.display());
            eprintln!("{err}");
            false
        }
    }
}

/// Default output path: `<output_dir>/<chart file stem>.html`
fn default_output_path(input_file: &Path, output_dir: &str) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map_or_else(|| "chart".into(), |s| s.to_string_lossy().to_string());
    PathBuf::from(output_dir).join(format!("{stem}.html"))
}

fn render_chart(
    input_file: &Path,
    output_file: Option<&Path>,
    title: Option<&str>,
    config: &Config,
) -> Result<(PathBuf, DiagramSummary), String> {
    let chart = load_chart(input_file)?;
    let mut ctx = RenderContext::from_chart(&chart, &config.render.title);
    if let Some(title) = title {
        ctx = ctx.with_title(title);
    }

    let output_path = output_file.map_or_else(
        || default_output_path(input_file, &config.paths.output_dir),
        Path::to_path_buf,
    );
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create output directory {}: {e}", parent.display())
            })?;
        }
    }

    let diagram = Diagram::build(&ctx);
    let index = ChartIndex::build(&ctx);
    verbose!(
        "Rendering '{}' on a {}x{} canvas",
        ctx.title,
        diagram.width,
        diagram.height
    );

    let html = HtmlRenderer::new()
        .render_page(ctx.title, &diagram, &index)
        .map_err(|e| format!("✗ Failed to render page: {e}"))?;
    fs::write(&output_path, html)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!("Page written: {} ({})", output_path.display(), diagram.summary);
    Ok((output_path, diagram.summary))
}

fn print_summary(summary: &DiagramSummary) {
    println!("\n=== Summary ===");
    println!("Markers: {}", summary.markers);
    println!("Family groups: {}", summary.family_groups);
    if summary.omitted_individuals > 0 || summary.omitted_families > 0 {
        println!(
            "⚠️  {} individuals and {} families have no layout entry (listed in the index only)",
            summary.omitted_individuals, summary.omitted_families
        );
    }
}
