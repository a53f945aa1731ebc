//! Precomputed chart geometry
//!
//! A layout is produced by an external layout engine. Entries are optional:
//! an individual or family without an entry is left out of the diagram but
//! still listed in the index.

use crate::core::models::{FamilyId, IndividualId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point in page pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned box with edge and centre anchors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Point,
    /// Width (`x`) and height (`y`)
    pub size: Point,
}

impl Rect {
    /// Create a box from its top-left corner and size
    #[must_use]
    pub const fn new(pos: Point, size: Point) -> Self {
        Self { pos, size }
    }

    /// Midpoint of the top edge
    #[must_use]
    pub fn top(&self) -> Point {
        Point::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Midpoint of the bottom edge
    #[must_use]
    pub fn bottom(&self) -> Point {
        Point::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    /// Midpoint of the left edge
    #[must_use]
    pub fn left(&self) -> Point {
        Point::new(self.pos.x, self.pos.y + self.size.y / 2.0)
    }

    /// Midpoint of the right edge
    #[must_use]
    pub fn right(&self) -> Point {
        Point::new(self.pos.x + self.size.x, self.pos.y + self.size.y / 2.0)
    }

    /// Centre of the box
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y + self.size.y / 2.0,
        )
    }
}

/// Placement of one individual's marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndividualLayout {
    /// Marker reference point (top-left corner)
    pub pos: Point,
    /// Attachment point for the line up to the parent family
    pub top: Point,
    /// Attachment point for the line down to the own family
    pub bottom: Point,
    /// Absolute generation level (diagnostic)
    pub alevel: i32,
    /// Position within the level (diagnostic)
    pub group: i32,
}

impl IndividualLayout {
    /// Derive an entry from the marker box
    #[must_use]
    pub fn from_rect(rect: Rect, alevel: i32, group: i32) -> Self {
        Self {
            pos: rect.pos,
            top: rect.top(),
            bottom: rect.bottom(),
            alevel,
            group,
        }
    }
}

/// Placement of one family's connector lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyLayout {
    /// Left end of the spouse bar
    pub left: Point,
    /// Right end of the spouse bar
    pub right: Point,
    /// Point where spouse and child connectors converge
    pub center: Point,
}

impl FamilyLayout {
    /// A horizontal spouse bar from `left_x` to `right_x` at height `y`
    #[must_use]
    pub fn spanning(left_x: f64, right_x: f64, y: f64) -> Self {
        let rect = Rect::new(Point::new(left_x, y), Point::new(right_x - left_x, 0.0));
        Self {
            left: rect.left(),
            right: rect.right(),
            center: rect.center(),
        }
    }
}

/// Geometry of a whole chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Entries for placed individuals
    #[serde(default)]
    pub individuals: HashMap<IndividualId, IndividualLayout>,
    /// Entries for placed families
    #[serde(default)]
    pub families: HashMap<FamilyId, FamilyLayout>,
}

impl Layout {
    /// An empty canvas
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Place an individual
    pub fn place_individual(&mut self, id: impl Into<IndividualId>, entry: IndividualLayout) {
        self.individuals.insert(id.into(), entry);
    }

    /// Place a family
    pub fn place_family(&mut self, id: impl Into<FamilyId>, entry: FamilyLayout) {
        self.families.insert(id.into(), entry);
    }

    /// Entry for an individual, if placed
    #[must_use]
    pub fn individual(&self, id: &IndividualId) -> Option<&IndividualLayout> {
        self.individuals.get(id)
    }

    /// Entry for a family, if placed
    #[must_use]
    pub fn family(&self, id: &FamilyId) -> Option<&FamilyLayout> {
        self.families.get(id)
    }

    /// Whether the family is placed
    #[must_use]
    pub fn has_family(&self, id: &FamilyId) -> bool {
        self.families.contains_key(id)
    }
}
