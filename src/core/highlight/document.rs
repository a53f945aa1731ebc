//! In-memory visual tree

use super::{ElementRef, Flag, VisualTree};
use crate::core::render::Diagram;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Flag sets of the elements of a rendered diagram
///
/// Mirrors what the browser holds in each element's class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagDocument {
    elements: IndexMap<ElementRef, BTreeSet<Flag>>,
}

impl FlagDocument {
    /// An empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding every group and marker of `diagram`, unflagged
    #[must_use]
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let mut document = Self::new();
        for group in &diagram.family_groups {
            document.insert(ElementRef::FamilyGroup(group.id.clone()));
        }
        for marker in &diagram.markers {
            document.insert(ElementRef::Marker(marker.id.clone()));
        }
        document
    }

    /// Add an unflagged element; an existing element keeps its flags
    pub fn insert(&mut self, element: ElementRef) {
        self.elements.entry(element).or_default();
    }

    /// Remove an element
    pub fn remove(&mut self, element: &ElementRef) {
        self.elements.shift_remove(element);
    }

    /// Flags currently set on an element
    #[must_use]
    pub fn flags(&self, element: &ElementRef) -> Option<&BTreeSet<Flag>> {
        self.elements.get(element)
    }

    /// Whether `flag` is set on the element
    #[must_use]
    pub fn has_flag(&self, element: &ElementRef, flag: Flag) -> bool {
        self.elements
            .get(element)
            .is_some_and(|flags| flags.contains(&flag))
    }

    /// Every set flag, in element order
    #[must_use]
    pub fn flagged(&self) -> Vec<(&ElementRef, Flag)> {
        self.elements
            .iter()
            .flat_map(|(element, flags)| flags.iter().map(move |flag| (element, *flag)))
            .collect()
    }

    /// Whether no element carries a flag
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.elements.values().all(BTreeSet::is_empty)
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl VisualTree for FlagDocument {
    fn contains(&self, element: &ElementRef) -> bool {
        self.elements.contains_key(element)
    }

    fn set_flag(&mut self, element: &ElementRef, flag: Flag) {
        if let Some(flags) = self.elements.get_mut(element) {
            flags.insert(flag);
        }
    }

    fn clear_flag(&mut self, element: &ElementRef, flag: Flag) {
        if let Some(flags) = self.elements.get_mut(element) {
            flags.remove(&flag);
        }
    }
}
