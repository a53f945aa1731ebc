//! Hover highlighting of family relationships
//!
//! Hovering a marker flags the marker itself, the family groups its
//! individual is a spouse in and the groups it is a child in. Leaving the
//! marker clears exactly those flags. The same transitions run in the
//! browser, driven by the lookup table the controller serializes into the
//! page.

pub mod controller;
pub mod document;

pub use controller::{HighlightController, MarkerFamilies, Transition};
pub use document::FlagDocument;

use crate::core::models::{FamilyGroupId, MarkerId};
use std::fmt;

/// A visual flag set on a diagram element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    /// The marker under the pointer
    SelfHovered,
    /// A group the hovered individual is a spouse in
    OwnFamilyHovered,
    /// A group the hovered individual is a child in
    ParentFamilyHovered,
}

impl Flag {
    /// All flags
    pub const ALL: [Self; 3] = [
        Self::SelfHovered,
        Self::OwnFamilyHovered,
        Self::ParentFamilyHovered,
    ];

    /// CSS class applied for the flag
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::SelfHovered => "self-hovered",
            Self::OwnFamilyHovered => "own-family-hovered",
            Self::ParentFamilyHovered => "parent-family-hovered",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// A flaggable element of the rendered diagram
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    /// An individual's marker
    Marker(MarkerId),
    /// A family's connector group
    FamilyGroup(FamilyGroupId),
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marker(id) => write!(f, "{id}"),
            Self::FamilyGroup(id) => write!(f, "{id}"),
        }
    }
}

/// The document the controller flags elements in
pub trait VisualTree {
    /// Whether the element exists
    fn contains(&self, element: &ElementRef) -> bool;

    /// Add `flag` to the element's flag set
    fn set_flag(&mut self, element: &ElementRef, flag: Flag);

    /// Remove `flag` from the element's flag set
    fn clear_flag(&mut self, element: &ElementRef, flag: Flag);
}
