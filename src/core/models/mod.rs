//! Data models for family trees

pub mod family;
pub mod ids;
pub mod individual;
pub mod tree;

pub use family::Family;
pub use ids::{FamilyGroupId, FamilyId, IndividualId, MarkerId};
pub use individual::{Date, Individual, Sex, UncertainDate};
pub use tree::{DanglingReference, FamilyTree, Relationships};
