//! HTML page generator
//!
//! Produces a self-contained page: the SVG connector layer with positioned
//! markers on top, the textual index below, and the hover controller script
//! together with the lookup table it runs on.

use super::{ChartIndex, Diagram, DocumentGenerator, RenderContext};
use crate::core::error::RenderError;
use crate::core::highlight::HighlightController;
use askama::Template;
use logger::info;
use std::fs;
use std::path::Path;

/// Template data for `templates/chart.html`
#[derive(Template)]
#[template(path = "chart.html")]
struct ChartPage<'a> {
    title: &'a str,
    diagram: &'a Diagram,
    index: &'a ChartIndex,
    highlight_index: &'a str,
}

/// HTML page generator
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Serialize the controller lookup for a `<script>` element
    ///
    /// Every `<` is written as `\u003c`, so neither `</script>` nor `<!--`
    /// in an id can end or re-open the element. The result is still valid
    /// JSON with the same value.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn highlight_index(controller: &HighlightController) -> Result<String, RenderError> {
        let json = serde_json::to_string(controller.lookup())?;
        Ok(json.replace('<', "\\u003c"))
    }

    /// Render an already built diagram and index
    ///
    /// # Errors
    /// Returns an error if the lookup cannot be serialized or the template fails
    pub fn render_page(
        &self,
        title: &str,
        diagram: &Diagram,
        index: &ChartIndex,
    ) -> Result<String, RenderError> {
        let controller = HighlightController::init(&diagram.markers);
        let highlight_index = Self::highlight_index(&controller)?;
        let page = ChartPage {
            title,
            diagram,
            index,
            highlight_index: &highlight_index,
        };
        Ok(page.render()?)
    }
}

impl DocumentGenerator for HtmlRenderer {
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), RenderError> {
        let content = self.render(ctx)?;
        fs::write(output_path, content).map_err(|source| RenderError::Io {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let diagram = Diagram::build(ctx);
        let index = ChartIndex::build(ctx);
        info!("Rendering '{}': {}", ctx.title, diagram.summary);
        self.render_page(ctx.title, &diagram, &index)
    }
}
