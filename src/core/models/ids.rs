//! Identifier types
//!
//! Entity ids (`IndividualId`, `FamilyId`) are the raw identifiers of the
//! family-tree data (e.g. GEDCOM pointers such as `@I1@`). The same raw id is
//! used three ways in a rendered page: as the index row anchor, as the marker
//! id and as the family group id. `MarkerId` and `FamilyGroupId` carry the
//! prefixed DOM form so the three uses cannot be mixed up.

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The raw identifier text
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the identifier is the empty string
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of an individual (person node)
    IndividualId
);

entity_id!(
    /// Identifier of a family (spouses plus children)
    FamilyId
);

/// DOM id of the marker rendered for an individual: `b<individual id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(IndividualId);

impl MarkerId {
    /// Prefix distinguishing marker ids from index row anchors
    pub const PREFIX: &'static str = "b";

    /// Marker id for `individual`
    #[must_use]
    pub fn of(individual: &IndividualId) -> Self {
        Self(individual.clone())
    }

    /// The individual this marker represents
    #[must_use]
    pub const fn individual(&self) -> &IndividualId {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl Serialize for MarkerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// DOM id of the group rendered for a family: `g<family id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FamilyGroupId(FamilyId);

impl FamilyGroupId {
    /// Prefix distinguishing family group ids from index row anchors
    pub const PREFIX: &'static str = "g";

    /// Group id for `family`
    #[must_use]
    pub fn of(family: &FamilyId) -> Self {
        Self(family.clone())
    }

    /// The family this group represents
    #[must_use]
    pub const fn family(&self) -> &FamilyId {
        &self.0
    }
}

impl fmt::Display for FamilyGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl Serialize for FamilyGroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
