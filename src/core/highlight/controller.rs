//! Hover state machine
//!
//! Each marker is either idle or hovered. `pointer_enter` sets the marker's
//! flags and `pointer_leave` clears exactly the same ones. Targets missing
//! from the visual tree are skipped without affecting the others.

use super::{ElementRef, Flag, VisualTree};
use crate::core::models::{FamilyGroupId, MarkerId};
use crate::core::render::Marker;
use indexmap::IndexMap;
use logger::debug;
use serde::Serialize;

/// Family groups highlighted together with one marker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkerFamilies {
    /// Groups the individual is a spouse in
    pub own: Vec<FamilyGroupId>,
    /// Groups the individual is a child in
    pub parent: Vec<FamilyGroupId>,
}

/// What one pointer event did to the visual tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The marker the event fired on
    pub marker: MarkerId,
    /// Flags set (on enter) or cleared (on leave), in application order
    pub applied: Vec<(ElementRef, Flag)>,
    /// Targets not present in the visual tree
    pub skipped: Vec<ElementRef>,
}

impl Transition {
    fn new(marker: &MarkerId) -> Self {
        Self {
            marker: marker.clone(),
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Whether the event changed nothing
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// Marker to family-group association driving hover highlights
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightController {
    markers: IndexMap<MarkerId, MarkerFamilies>,
}

impl HighlightController {
    /// Register every rendered marker
    #[must_use]
    pub fn init(markers: &[Marker]) -> Self {
        let mut controller = Self::default();
        controller.reinit(markers);
        controller
    }

    /// Replace the registrations with a freshly rendered marker set
    pub fn reinit(&mut self, markers: &[Marker]) {
        self.markers = markers
            .iter()
            .map(|marker| {
                let families = MarkerFamilies {
                    own: marker.own_families.iter().map(FamilyGroupId::of).collect(),
                    parent: marker.parent_families.iter().map(FamilyGroupId::of).collect(),
                };
                (marker.id.clone(), families)
            })
            .collect();
        debug!("Highlight controller registered {} markers", self.markers.len());
    }

    /// Whether a marker is registered
    #[must_use]
    pub fn is_registered(&self, marker: &MarkerId) -> bool {
        self.markers.contains_key(marker)
    }

    /// Groups associated with a marker
    #[must_use]
    pub fn families(&self, marker: &MarkerId) -> Option<&MarkerFamilies> {
        self.markers.get(marker)
    }

    /// The full association, in marker order
    ///
    /// Serializes to `{"b<id>": {"own": ["g<id>", ...], "parent": [...]}}`.
    #[must_use]
    pub const fn lookup(&self) -> &IndexMap<MarkerId, MarkerFamilies> {
        &self.markers
    }

    /// Pointer moved onto a marker
    pub fn pointer_enter<T: VisualTree + ?Sized>(
        &self,
        marker: &MarkerId,
        tree: &mut T,
    ) -> Transition {
        self.transition(marker, tree, true)
    }

    /// Pointer moved off a marker
    pub fn pointer_leave<T: VisualTree + ?Sized>(
        &self,
        marker: &MarkerId,
        tree: &mut T,
    ) -> Transition {
        self.transition(marker, tree, false)
    }

    fn transition<T: VisualTree + ?Sized>(
        &self,
        marker: &MarkerId,
        tree: &mut T,
        hovered: bool,
    ) -> Transition {
        let mut transition = Transition::new(marker);
        let Some(families) = self.markers.get(marker) else {
            debug!("Pointer event on unregistered marker {}", marker);
            return transition;
        };

        let targets = std::iter::once((ElementRef::Marker(marker.clone()), Flag::SelfHovered))
            .chain(
                families
                    .own
                    .iter()
                    .map(|g| (ElementRef::FamilyGroup(g.clone()), Flag::OwnFamilyHovered)),
            )
            .chain(
                families
                    .parent
                    .iter()
                    .map(|g| (ElementRef::FamilyGroup(g.clone()), Flag::ParentFamilyHovered)),
            );

        for (element, flag) in targets {
            if !tree.contains(&element) {
                debug!("Highlight target {} not found; skipped", element);
                transition.skipped.push(element);
                continue;
            }
            // Flags are plain on/off, not counted: at most one marker is
            // hovered at a time, so leave clears exactly what enter set.
            if hovered {
                tree.set_flag(&element, flag);
            } else {
                tree.clear_flag(&element, flag);
            }
            transition.applied.push((element, flag));
        }

        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::highlight::FlagDocument;
    use crate::core::layout::Point;
    use crate::core::models::{FamilyId, IndividualId};

    fn marker(id: &str, own: &[&str], parent: &[&str]) -> Marker {
        Marker {
            id: MarkerId::of(&IndividualId::new(id)),
            pos: Point::default(),
            name: id.to_string(),
            own_families: own.iter().map(|f| FamilyId::new(*f)).collect(),
            parent_families: parent.iter().map(|f| FamilyId::new(*f)).collect(),
        }
    }

    fn marker_id(id: &str) -> MarkerId {
        MarkerId::of(&IndividualId::new(id))
    }

    fn group(id: &str) -> ElementRef {
        ElementRef::FamilyGroup(FamilyGroupId::of(&FamilyId::new(id)))
    }

    #[test]
    fn test_init_builds_typed_association() {
        let controller = HighlightController::init(&[marker("A", &["F1"], &["F0"])]);
        let families = controller.families(&marker_id("A")).unwrap();
        assert_eq!(families.own, vec![FamilyGroupId::of(&FamilyId::new("F1"))]);
        assert_eq!(families.parent, vec![FamilyGroupId::of(&FamilyId::new("F0"))]);
        assert!(!controller.is_registered(&marker_id("B")));
    }

    #[test]
    fn test_reinit_replaces_registrations() {
        let mut controller = HighlightController::init(&[marker("A", &[], &[])]);
        controller.reinit(&[marker("B", &[], &[])]);
        assert!(!controller.is_registered(&marker_id("A")));
        assert!(controller.is_registered(&marker_id("B")));
    }

    #[test]
    fn test_missing_group_is_skipped() {
        let controller = HighlightController::init(&[marker("A", &["F1", "F2"], &[])]);
        let mut document = FlagDocument::new();
        document.insert(ElementRef::Marker(marker_id("A")));
        document.insert(group("F2"));

        let transition = controller.pointer_enter(&marker_id("A"), &mut document);
        assert_eq!(transition.skipped, vec![group("F1")]);
        assert_eq!(transition.applied.len(), 2);
        assert!(document.has_flag(&group("F2"), Flag::OwnFamilyHovered));
    }

    #[test]
    fn test_unregistered_marker_is_noop() {
        let controller = HighlightController::default();
        let mut document = FlagDocument::new();
        document.insert(ElementRef::Marker(marker_id("A")));

        let transition = controller.pointer_enter(&marker_id("A"), &mut document);
        assert!(transition.is_noop());
        assert!(transition.skipped.is_empty());
        assert!(document.is_clear());
    }

    #[test]
    fn test_lookup_serializes_dom_ids() {
        let controller = HighlightController::init(&[
            marker("A", &["F1"], &[]),
            marker("C", &[], &["F1"]),
        ]);
        let json = serde_json::to_string(controller.lookup()).unwrap();
        assert_eq!(
            json,
            r#"{"bA":{"own":["gF1"],"parent":[]},"bC":{"own":[],"parent":["gF1"]}}"#
        );
    }
}
