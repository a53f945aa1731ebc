//! Hover command handler
//!
//! Renders a chart in memory and runs one enter/leave cycle over the marker
//! of the chosen individual, reporting what the page script would do.

use super::load_chart;
use family_tree_page::config::Config;
use family_tree_page::core::highlight::{FlagDocument, HighlightController, Transition};
use family_tree_page::core::models::{IndividualId, MarkerId};
use family_tree_page::core::render::{Diagram, RenderContext};
use logger::{error, info};
use std::path::Path;

/// Outcome of one simulated hover
#[derive(Debug)]
struct HoverReport {
    enter: Transition,
    leave: Transition,
    restored: bool,
}

/// Run the hover command. Returns `false` on failure.
pub fn run(input_file: &Path, individual: &str, config: &Config) -> bool {
    match simulate(input_file, individual, config) {
        Ok(report) => {
            print_report(&report);
            true
        }
        Err(err) => {
            error!("Hover simulation failed for {}: {err}", input_file.display());
            eprintln!("{err}");
            false
        }
    }
}

fn simulate(input_file: &Path, individual: &str, config: &Config) -> Result<HoverReport, String> {
    let chart = load_chart(input_file)?;
    if chart.tree.individual(individual).is_none() {
        return Err(format!(
            "✗ No individual '{individual}' in {}",
            input_file.display()
        ));
    }

    let ctx = RenderContext::from_chart(&chart, &config.render.title);
    let diagram = Diagram::build(&ctx);
    let controller = HighlightController::init(&diagram.markers);
    let marker = MarkerId::of(&IndividualId::new(individual));
    if !controller.is_registered(&marker) {
        return Err(format!(
            "✗ Individual '{individual}' has no layout entry, so no marker is drawn"
        ));
    }

    let mut document = FlagDocument::from_diagram(&diagram);
    let initial = document.clone();

    let enter = controller.pointer_enter(&marker, &mut document);
    info!(
        "Hover {}: {} flags set, {} targets skipped",
        marker,
        enter.applied.len(),
        enter.skipped.len()
    );
    let leave = controller.pointer_leave(&marker, &mut document);

    Ok(HoverReport {
        enter,
        leave,
        restored: document == initial,
    })
}

fn print_report(report: &HoverReport) {
    println!("\n=== Hover {} ===", report.enter.marker);
    println!("Flags set on enter:");
    for (element, flag) in &report.enter.applied {
        println!("  {element}: {flag}");
    }
    if !report.enter.skipped.is_empty() {
        println!("Skipped (not on the page):");
        for element in &report.enter.skipped {
            println!("  {element}");
        }
    }
    println!("Flags cleared on leave: {}", report.leave.applied.len());
    if report.restored {
        println!("✓ Leave restored the initial state");
    } else {
        println!("✗ Leave did not restore the initial state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const CHART: &str = r#"
[[individuals]]
id = "A"
name = "Alice"
spouse_of = ["F1"]

[[individuals]]
id = "B"
name = "Bob"
spouse_of = ["F1"]

[[individuals]]
id = "Z"
name = "Unplaced"

[[families]]
id = "F1"

[layout]
width = 400
height = 200
[layout.individuals.A]
pos = { x = 20, y = 30 }
top = { x = 90, y = 30 }
bottom = { x = 90, y = 66 }
alevel = 0
group = 0
[layout.individuals.B]
pos = { x = 180, y = 30 }
top = { x = 250, y = 30 }
bottom = { x = 250, y = 66 }
alevel = 0
group = 1
[layout.families.F1]
left = { x = 90, y = 81 }
right = { x = 250, y = 81 }
center = { x = 170, y = 81 }
"#;

    fn write_chart() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");
        fs::write(&path, CHART).unwrap();
        (dir, path)
    }

    #[test]
    fn test_hover_sets_and_restores() {
        let (_dir, path) = write_chart();
        let report = simulate(&path, "A", &Config::default()).unwrap();
        assert_eq!(report.enter.applied.len(), 2);
        assert_eq!(report.leave.applied.len(), 2);
        assert!(report.enter.skipped.is_empty());
        assert!(report.restored);
    }

    #[test]
    fn test_hover_unknown_individual() {
        let (_dir, path) = write_chart();
        let err = simulate(&path, "Q", &Config::default()).unwrap_err();
        assert!(err.contains("No individual 'Q'"));
    }

    #[test]
    fn test_hover_unplaced_individual() {
        let (_dir, path) = write_chart();
        let err = simulate(&path, "Z", &Config::default()).unwrap_err();
        assert!(err.contains("no layout entry"));
    }
}
