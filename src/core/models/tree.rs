//! Relationship index over individuals and families

use super::{Family, FamilyId, Individual, IndividualId};
use crate::core::error::ChartError;
use indexmap::IndexMap;
use std::fmt;

/// Read-only accessor for family relationships
///
/// Every list is ordered; unknown ids yield an empty slice.
pub trait Relationships {
    /// Spouses of a family, in display order
    fn family_spouses(&self, family: &FamilyId) -> &[IndividualId];

    /// Children of a family, in display order
    fn family_children(&self, family: &FamilyId) -> &[IndividualId];

    /// Families in which the individual is a spouse
    fn own_families(&self, individual: &IndividualId) -> &[FamilyId];

    /// Families in which the individual is a child
    fn parent_families(&self, individual: &IndividualId) -> &[FamilyId];
}

/// A link naming an entity that does not exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// An individual is linked to a family with no entity
    MissingFamily {
        /// The linked individual
        individual: IndividualId,
        /// The family that does not exist
        family: FamilyId,
    },
    /// A family lists a member with no entity
    MissingIndividual {
        /// The family holding the link
        family: FamilyId,
        /// The individual that does not exist
        individual: IndividualId,
    },
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFamily { individual, family } => {
                write!(f, "individual {individual} refers to unknown family {family}")
            }
            Self::MissingIndividual { family, individual } => {
                write!(f, "family {family} refers to unknown individual {individual}")
            }
        }
    }
}

/// Individuals, families and the links between them
///
/// Links are stored in both directions, like a prerequisite graph keeps
/// dependencies and dependents:
/// - individual -> own families / parent families
/// - family -> spouses / children
///
/// Entity maps keep insertion order, which is the display order of index rows
/// and diagram elements. Link lists keep the order links were added.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    individuals: IndexMap<IndividualId, Individual>,
    families: IndexMap<FamilyId, Family>,
    own_families: IndexMap<IndividualId, Vec<FamilyId>>,
    parent_families: IndexMap<IndividualId, Vec<FamilyId>>,
    spouses: IndexMap<FamilyId, Vec<IndividualId>>,
    children: IndexMap<FamilyId, Vec<IndividualId>>,
}

fn push_unique<T: PartialEq + Clone>(list: &mut Vec<T>, item: &T) {
    if !list.contains(item) {
        list.push(item.clone());
    }
}

impl FamilyTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an individual
    ///
    /// # Errors
    /// Returns an error if the id is empty or already present
    pub fn add_individual(&mut self, individual: Individual) -> Result<(), ChartError> {
        if individual.id.is_empty() {
            return Err(ChartError::EmptyId("individual"));
        }
        if self.individuals.contains_key(&individual.id) {
            return Err(ChartError::DuplicateIndividual(individual.id));
        }
        self.individuals.insert(individual.id.clone(), individual);
        Ok(())
    }

    /// Add a family
    ///
    /// # Errors
    /// Returns an error if the id is empty or already present
    pub fn add_family(&mut self, family: Family) -> Result<(), ChartError> {
        if family.id.is_empty() {
            return Err(ChartError::EmptyId("family"));
        }
        if self.families.contains_key(&family.id) {
            return Err(ChartError::DuplicateFamily(family.id));
        }
        self.families.insert(family.id.clone(), family);
        Ok(())
    }

    /// Record that `individual` is a spouse in `family`
    ///
    /// Repeated links are stored once.
    pub fn link_spouse(&mut self, individual: &IndividualId, family: &FamilyId) {
        push_unique(self.own_families.entry(individual.clone()).or_default(), family);
        push_unique(self.spouses.entry(family.clone()).or_default(), individual);
    }

    /// Record that `individual` is a child of `family`
    ///
    /// Repeated links are stored once.
    pub fn link_child(&mut self, individual: &IndividualId, family: &FamilyId) {
        push_unique(self.parent_families.entry(individual.clone()).or_default(), family);
        push_unique(self.children.entry(family.clone()).or_default(), individual);
    }

    /// All individuals in insertion order
    #[must_use]
    pub const fn individuals(&self) -> &IndexMap<IndividualId, Individual> {
        &self.individuals
    }

    /// All families in insertion order
    #[must_use]
    pub const fn families(&self) -> &IndexMap<FamilyId, Family> {
        &self.families
    }

    /// Look up an individual
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Look up a family
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Number of individuals
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Links that name an individual or family with no entity
    ///
    /// Reported in link insertion order: individual-side links first, then
    /// family-side links.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut found = Vec::new();

        for links in [&self.own_families, &self.parent_families] {
            for (individual, families) in links {
                for family in families {
                    if !self.families.contains_key(family) {
                        let reference = DanglingReference::MissingFamily {
                            individual: individual.clone(),
                            family: family.clone(),
                        };
                        push_unique(&mut found, &reference);
                    }
                }
            }
        }

        for links in [&self.spouses, &self.children] {
            for (family, members) in links {
                for individual in members {
                    if !self.individuals.contains_key(individual) {
                        let reference = DanglingReference::MissingIndividual {
                            family: family.clone(),
                            individual: individual.clone(),
                        };
                        push_unique(&mut found, &reference);
                    }
                }
            }
        }

        found
    }
}

impl Relationships for FamilyTree {
    fn family_spouses(&self, family: &FamilyId) -> &[IndividualId] {
        self.spouses.get(family).map(Vec::as_slice).unwrap_or_default()
    }

    fn family_children(&self, family: &FamilyId) -> &[IndividualId] {
        self.children.get(family).map(Vec::as_slice).unwrap_or_default()
    }

    fn own_families(&self, individual: &IndividualId) -> &[FamilyId] {
        self.own_families.get(individual).map(Vec::as_slice).unwrap_or_default()
    }

    fn parent_families(&self, individual: &IndividualId) -> &[FamilyId] {
        self.parent_families.get(individual).map(Vec::as_slice).unwrap_or_default()
    }
}

fn join_ids<T: fmt::Display>(ids: &[T]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for FamilyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Family tree ({} individuals, {} families):",
            self.individuals.len(),
            self.families.len()
        )?;
        writeln!(f)?;

        for id in self.families.keys() {
            writeln!(
                f,
                "  {id}: spouses {} | children {}",
                join_ids(self.family_spouses(id)),
                join_ids(self.family_children(id))
            )?;
        }

        Ok(())
    }
}
