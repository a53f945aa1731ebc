//! Chart page rendering
//!
//! Rendering is split into pure view models and a document generator:
//! - [`Diagram`]: family groups with their connector lines, and positioned
//!   individual markers
//! - [`ChartIndex`]: the full textual index, independent of the layout
//! - [`HtmlRenderer`]: the self-contained HTML page built from both

pub mod diagram;
pub mod html;
pub mod index;

use crate::core::chart::Chart;
use crate::core::error::RenderError;
use crate::core::layout::Layout;
use crate::core::models::{Family, FamilyId, FamilyTree, Individual, IndividualId, Relationships};
use indexmap::IndexMap;
use std::path::Path;

pub use diagram::{Connector, ConnectorKind, Diagram, DiagramSummary, FamilyGroup, Line, Marker};
pub use html::HtmlRenderer;
pub use index::{ChartIndex, FamilyRow, IndividualRow, Link};

/// Data context for rendering
///
/// Aggregates everything a renderer reads. Nothing in it is mutated while
/// rendering.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Page title
    pub title: &'a str,
    /// Individuals in display order
    pub individuals: &'a IndexMap<IndividualId, Individual>,
    /// Families in display order
    pub families: &'a IndexMap<FamilyId, Family>,
    /// Relationship accessor
    pub relationships: &'a dyn Relationships,
    /// Precomputed geometry
    pub layout: &'a Layout,
}

impl<'a> RenderContext<'a> {
    /// Create a render context from its parts
    #[must_use]
    pub fn new(
        title: &'a str,
        individuals: &'a IndexMap<IndividualId, Individual>,
        families: &'a IndexMap<FamilyId, Family>,
        relationships: &'a dyn Relationships,
        layout: &'a Layout,
    ) -> Self {
        Self {
            title,
            individuals,
            families,
            relationships,
            layout,
        }
    }

    /// Create a render context over a relationship index
    #[must_use]
    pub fn from_tree(title: &'a str, tree: &'a FamilyTree, layout: &'a Layout) -> Self {
        Self::new(title, tree.individuals(), tree.families(), tree, layout)
    }

    /// Create a render context over a loaded chart
    ///
    /// The chart's own title wins over `default_title`.
    #[must_use]
    pub fn from_chart(chart: &'a Chart, default_title: &'a str) -> Self {
        let title = chart.title.as_deref().unwrap_or(default_title);
        Self::from_tree(title, &chart.tree, &chart.layout)
    }

    /// Replace the page title
    #[must_use]
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

/// Trait for page generators
pub trait DocumentGenerator {
    /// Generate a page to a file
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, ctx: &RenderContext, output_path: &Path) -> Result<(), RenderError>;

    /// Generate page content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &RenderContext) -> Result<String, RenderError>;
}
