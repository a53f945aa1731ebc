//! Family model

use super::FamilyId;
use serde::{Deserialize, Serialize};

/// A union of spouses and their children
///
/// Membership lives in the relationship index ([`FamilyTree`](super::FamilyTree));
/// the family entity itself only carries its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique identifier
    pub id: FamilyId,
}

impl Family {
    /// Create a family
    #[must_use]
    pub fn new(id: impl Into<FamilyId>) -> Self {
        Self { id: id.into() }
    }
}
