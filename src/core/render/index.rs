//! Textual chart index
//!
//! Lists every individual and family, laid out or not. Each row is anchored
//! by the raw entity id so other rows can link to it with `#<id>`.

use super::RenderContext;
use crate::core::models::{FamilyId, IndividualId};

/// Shown in place of a level or group for individuals without a layout entry
pub const UNPLACED: &str = "-";

/// A link to another index row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Anchor id of the target row
    pub target: String,
    /// Link text
    pub label: String,
}

impl Link {
    /// URL fragment pointing at the target row
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Index row for one individual
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualRow {
    /// Row anchor and displayed id
    pub id: String,
    /// Generation level, or [`UNPLACED`]
    pub alevel: String,
    /// Position within the level, or [`UNPLACED`]
    pub group: String,
    /// Name
    pub name: String,
    /// Sex
    pub sex: String,
    /// Birth date text (empty when not recorded)
    pub birth: String,
    /// Death date text (empty when not recorded)
    pub death: String,
    /// Families the individual is a child in
    pub parent_families: Vec<Link>,
    /// Families the individual is a spouse in
    pub own_families: Vec<Link>,
}

/// Index row for one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRow {
    /// Row anchor and displayed id
    pub id: String,
    /// Spouses of the family
    pub spouses: Vec<Link>,
    /// Children of the family
    pub children: Vec<Link>,
}

/// Full textual index of a chart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartIndex {
    /// One row per individual, in display order
    pub individuals: Vec<IndividualRow>,
    /// One row per family, in display order
    pub families: Vec<FamilyRow>,
}

impl ChartIndex {
    /// Build the index for a render context
    #[must_use]
    pub fn build(ctx: &RenderContext) -> Self {
        let individuals = ctx
            .individuals
            .iter()
            .map(|(id, individual)| {
                let entry = ctx.layout.individual(id);
                IndividualRow {
                    id: id.to_string(),
                    alevel: entry.map_or_else(|| UNPLACED.to_string(), |e| e.alevel.to_string()),
                    group: entry.map_or_else(|| UNPLACED.to_string(), |e| e.group.to_string()),
                    name: individual.name.clone(),
                    sex: individual.sex.to_string(),
                    birth: individual.birth_text(),
                    death: individual.death_text(),
                    parent_families: family_links(ctx, ctx.relationships.parent_families(id)),
                    own_families: family_links(ctx, ctx.relationships.own_families(id)),
                }
            })
            .collect();

        let families = ctx
            .families
            .keys()
            .map(|id| FamilyRow {
                id: id.to_string(),
                spouses: individual_links(ctx, ctx.relationships.family_spouses(id)),
                children: individual_links(ctx, ctx.relationships.family_children(id)),
            })
            .collect();

        Self {
            individuals,
            families,
        }
    }
}

fn family_links(ctx: &RenderContext, families: &[FamilyId]) -> Vec<Link> {
    families
        .iter()
        .filter(|id| ctx.families.contains_key(*id))
        .map(|id| Link {
            target: id.to_string(),
            label: id.to_string(),
        })
        .collect()
}

fn individual_links(ctx: &RenderContext, individuals: &[IndividualId]) -> Vec<Link> {
    individuals
        .iter()
        .filter_map(|id| ctx.individuals.get(id).map(|individual| (id, individual)))
        .map(|(id, individual)| Link {
            target: id.to_string(),
            label: individual.name.clone(),
        })
        .collect()
}
