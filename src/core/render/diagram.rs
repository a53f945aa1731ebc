//! Diagram view model
//!
//! Turns a layout plus the relationship index into the elements drawn on
//! the canvas. Individuals and families without a layout entry are left
//! out; links naming an entity that does not exist are skipped.

use super::RenderContext;
use crate::core::layout::Point;
use crate::core::models::{FamilyGroupId, FamilyId, IndividualId, MarkerId};
use logger::debug;
use std::fmt;

/// A straight SVG line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point
    pub from: Point,
    /// End point
    pub to: Point,
}

impl Line {
    /// Create a line between two points
    #[must_use]
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// What a connector joins to its family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// From a spouse's bottom anchor down to the family centre line
    Spouse,
    /// From a child's top anchor up to the family centre line
    Child,
}

impl ConnectorKind {
    /// CSS class of the drawn line
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Spouse => "spouse-line",
            Self::Child => "child-line",
        }
    }
}

/// A vertical line joining one individual to a family
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Spouse or child
    pub kind: ConnectorKind,
    /// The joined individual
    pub individual: IndividualId,
    /// Geometry
    pub line: Line,
}

/// All lines drawn for one family, grouped under `g<family id>`
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyGroup {
    /// DOM id
    pub id: FamilyGroupId,
    /// Horizontal bar from the family's left to right point
    pub spouse_bar: Line,
    /// Spouse connectors followed by child connectors
    pub connectors: Vec<Connector>,
}

/// A positioned box for one individual, identified as `b<individual id>`
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// DOM id
    pub id: MarkerId,
    /// Top-left corner on the canvas
    pub pos: Point,
    /// Displayed name
    pub name: String,
    /// Laid-out families in which the individual is a spouse
    pub own_families: Vec<FamilyId>,
    /// Laid-out families in which the individual is a child
    pub parent_families: Vec<FamilyId>,
}

fn join_families(families: &[FamilyId]) -> String {
    families
        .iter()
        .map(FamilyId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

impl Marker {
    /// Value of the `data-own-families` attribute
    #[must_use]
    pub fn own_families_attr(&self) -> String {
        join_families(&self.own_families)
    }

    /// Value of the `data-parent-families` attribute
    #[must_use]
    pub fn parent_families_attr(&self) -> String {
        join_families(&self.parent_families)
    }
}

/// Counts of drawn and omitted elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagramSummary {
    /// Individuals drawn as markers
    pub markers: usize,
    /// Individuals without a layout entry
    pub omitted_individuals: usize,
    /// Families drawn as groups
    pub family_groups: usize,
    /// Families without a layout entry
    pub omitted_families: usize,
}

impl fmt::Display for DiagramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} markers ({} unplaced), {} family groups ({} unplaced)",
            self.markers, self.omitted_individuals, self.family_groups, self.omitted_families
        )
    }
}

/// Everything drawn on the chart canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Family groups in family display order
    pub family_groups: Vec<FamilyGroup>,
    /// Markers in individual display order
    pub markers: Vec<Marker>,
    /// Drawn and omitted counts
    pub summary: DiagramSummary,
}

impl Diagram {
    /// Build the diagram for a render context
    #[must_use]
    pub fn build(ctx: &RenderContext) -> Self {
        let mut summary = DiagramSummary::default();

        let mut family_groups = Vec::new();
        for family_id in ctx.families.keys() {
            match Self::family_group(ctx, family_id) {
                Some(group) => family_groups.push(group),
                None => {
                    debug!("Family {} has no layout entry; not drawn", family_id);
                    summary.omitted_families += 1;
                }
            }
        }
        summary.family_groups = family_groups.len();

        let mut markers = Vec::new();
        for (individual_id, individual) in ctx.individuals {
            let Some(entry) = ctx.layout.individual(individual_id) else {
                debug!("Individual {} has no layout entry; not drawn", individual_id);
                summary.omitted_individuals += 1;
                continue;
            };
            markers.push(Marker {
                id: MarkerId::of(individual_id),
                pos: entry.pos,
                name: individual.name.clone(),
                own_families: Self::laid_out_families(
                    ctx,
                    ctx.relationships.own_families(individual_id),
                ),
                parent_families: Self::laid_out_families(
                    ctx,
                    ctx.relationships.parent_families(individual_id),
                ),
            });
        }
        summary.markers = markers.len();

        Self {
            width: ctx.layout.width,
            height: ctx.layout.height,
            family_groups,
            markers,
            summary,
        }
    }

    /// Group for a family, or `None` when the family is not laid out
    fn family_group(ctx: &RenderContext, family_id: &FamilyId) -> Option<FamilyGroup> {
        let entry = ctx.layout.family(family_id)?;
        let center_y = entry.center.y;

        let mut connectors = Vec::new();
        let members = [
            (ConnectorKind::Spouse, ctx.relationships.family_spouses(family_id)),
            (ConnectorKind::Child, ctx.relationships.family_children(family_id)),
        ];
        for (kind, individuals) in members {
            for individual in individuals {
                if !ctx.individuals.contains_key(individual) {
                    continue;
                }
                let Some(placed) = ctx.layout.individual(individual) else {
                    continue;
                };
                let anchor = match kind {
                    ConnectorKind::Spouse => placed.bottom,
                    ConnectorKind::Child => placed.top,
                };
                connectors.push(Connector {
                    kind,
                    individual: individual.clone(),
                    line: Line::new(anchor, Point::new(anchor.x, center_y)),
                });
            }
        }

        Some(FamilyGroup {
            id: FamilyGroupId::of(family_id),
            spouse_bar: Line::new(entry.left, entry.right),
            connectors,
        })
    }

    /// Families from `linked` that have a layout entry, order preserved
    fn laid_out_families(ctx: &RenderContext, linked: &[FamilyId]) -> Vec<FamilyId> {
        linked
            .iter()
            .filter(|family| ctx.layout.has_family(family))
            .cloned()
            .collect()
    }

    /// Marker drawn for an individual
    #[must_use]
    pub fn marker(&self, individual: &IndividualId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id.individual() == individual)
    }

    /// Group drawn for a family
    #[must_use]
    pub fn group(&self, family: &FamilyId) -> Option<&FamilyGroup> {
        self.family_groups.iter().find(|g| g.id.family() == family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::{FamilyLayout, IndividualLayout, Layout, Rect};
    use crate::core::models::{Family, FamilyTree, Individual};

    fn placed(x: f64, y: f64) -> IndividualLayout {
        IndividualLayout::from_rect(Rect::new(Point::new(x, y), Point::new(140.0, 36.0)), 0, 0)
    }

    /// A and B married in F1; C their child, laid out only partly
    fn sample() -> (FamilyTree, Layout) {
        let mut tree = FamilyTree::new();
        for (id, name) in [("A", "Alice"), ("B", "Bob"), ("C", "Carol")] {
            tree.add_individual(Individual::new(id, name)).unwrap();
        }
        tree.add_family(Family::new("F1")).unwrap();
        tree.add_family(Family::new("F2")).unwrap();
        let f1 = FamilyId::new("F1");
        tree.link_spouse(&IndividualId::new("A"), &f1);
        tree.link_spouse(&IndividualId::new("B"), &f1);
        tree.link_child(&IndividualId::new("C"), &f1);
        tree.link_spouse(&IndividualId::new("C"), &FamilyId::new("F2"));

        let mut layout = Layout::new(400.0, 200.0);
        layout.place_individual("A", placed(20.0, 30.0));
        layout.place_individual("B", placed(180.0, 30.0));
        layout.place_individual("C", placed(100.0, 126.0));
        layout.place_family("F1", FamilyLayout::spanning(90.0, 250.0, 81.0));
        (tree, layout)
    }

    #[test]
    fn test_markers_follow_layout() {
        let (tree, layout) = sample();
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));

        let ids: Vec<String> = diagram.markers.iter().map(|m| m.id.to_string()).collect();
        assert_eq!(ids, vec!["bA", "bB", "bC"]);
        let b = diagram.marker(&IndividualId::new("B")).unwrap();
        assert_eq!(b.pos, Point::new(180.0, 30.0));
        assert_eq!(b.name, "Bob");
    }

    #[test]
    fn test_connectors_end_at_center_line() {
        let (tree, layout) = sample();
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));

        let group = diagram.group(&FamilyId::new("F1")).unwrap();
        assert_eq!(group.id.to_string(), "gF1");
        assert_eq!(group.spouse_bar.from, Point::new(90.0, 81.0));
        assert_eq!(group.spouse_bar.to, Point::new(250.0, 81.0));

        let kinds: Vec<ConnectorKind> = group.connectors.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ConnectorKind::Spouse, ConnectorKind::Spouse, ConnectorKind::Child]
        );
        for connector in &group.connectors {
            assert!((connector.line.to.y - 81.0).abs() < f64::EPSILON);
            assert!((connector.line.to.x - connector.line.from.x).abs() < f64::EPSILON);
        }
        // A's bottom anchor, C's top anchor
        assert_eq!(group.connectors[0].line.from, Point::new(90.0, 66.0));
        assert_eq!(group.connectors[2].line.from, Point::new(170.0, 126.0));
    }

    #[test]
    fn test_unplaced_family_is_omitted_everywhere() {
        let (tree, layout) = sample();
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));

        assert!(diagram.group(&FamilyId::new("F2")).is_none());
        let c = diagram.marker(&IndividualId::new("C")).unwrap();
        assert!(c.own_families.is_empty());
        assert_eq!(c.own_families_attr(), "");
        assert_eq!(c.parent_families_attr(), "F1");
        assert_eq!(
            diagram.summary,
            DiagramSummary {
                markers: 3,
                omitted_individuals: 0,
                family_groups: 1,
                omitted_families: 1,
            }
        );
    }

    #[test]
    fn test_unplaced_member_has_no_connector() {
        let (tree, mut layout) = sample();
        layout.individuals.remove(&IndividualId::new("B"));
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));

        let group = diagram.group(&FamilyId::new("F1")).unwrap();
        assert_eq!(group.connectors.len(), 2);
        assert!(diagram.marker(&IndividualId::new("B")).is_none());
        assert_eq!(diagram.summary.omitted_individuals, 1);
    }

    #[test]
    fn test_attribute_keeps_laid_out_family_without_entity() {
        let (mut tree, mut layout) = sample();
        tree.link_spouse(&IndividualId::new("C"), &FamilyId::new("F9"));
        layout.place_family("F9", FamilyLayout::spanning(0.0, 10.0, 5.0));
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));

        // F9 has no family entity, so no group is drawn for it
        assert!(diagram.group(&FamilyId::new("F9")).is_none());
        let c = diagram.marker(&IndividualId::new("C")).unwrap();
        assert_eq!(c.own_families_attr(), "F9");
    }

    #[test]
    fn test_empty_tree_gives_empty_canvas() {
        let tree = FamilyTree::new();
        let layout = Layout::new(10.0, 20.0);
        let diagram = Diagram::build(&RenderContext::from_tree("t", &tree, &layout));
        assert!(diagram.markers.is_empty());
        assert!(diagram.family_groups.is_empty());
        assert!((diagram.height - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_display() {
        let summary = DiagramSummary {
            markers: 3,
            omitted_individuals: 1,
            family_groups: 2,
            omitted_families: 0,
        };
        assert_eq!(
            summary.to_string(),
            "3 markers (1 unplaced), 2 family groups (0 unplaced)"
        );
    }
}
