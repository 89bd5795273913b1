//! Bounding rectangles of growing grids.

use std::ops::RangeInclusive;

use crate::position::Position;

/// Width and height of a grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build a ceiling from optional limits. A ceiling needs both a width and
    /// a height; anything less means "unbounded".
    #[must_use]
    pub fn from_limits(max_width: Option<u32>, max_height: Option<u32>) -> Option<Self> {
        match (max_width, max_height) {
            (Some(width), Some(height)) => Some(Self::new(width, height)),
            _ => None,
        }
    }

    /// True if `self` is no wider and no taller than `other`.
    #[must_use]
    pub fn fits_into(&self, other: &Dimensions) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Running min/max of the coordinates seen so far.
///
/// A fresh shape already covers [`Position::ORIGIN`]: every grid starts its
/// first word there, so anchoring at the origin never changes the bounding
/// box of a non-empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Shape {
    /// Widen the shape so that it covers `position`.
    pub fn update(&mut self, position: Position) {
        self.min_x = self.min_x.min(position.x);
        self.min_y = self.min_y.min(position.y);
        self.max_x = self.max_x.max(position.x);
        self.max_y = self.max_y.max(position.y);
    }

    /// A copy of this shape widened by `positions`; `self` is untouched.
    #[must_use]
    pub fn with_new_positions(&self, positions: &[Position]) -> Shape {
        let mut shape = *self;
        for &position in positions {
            shape.update(position);
        }
        shape
    }

    /// Would the shape still fit into `ceiling` after covering `positions`?
    #[must_use]
    pub fn fits_with(&self, positions: &[Position], ceiling: &Dimensions) -> bool {
        self.with_new_positions(positions).dimensions().fits_into(ceiling)
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            (self.max_x - self.min_x + 1).unsigned_abs(),
            (self.max_y - self.min_y + 1).unsigned_abs(),
        )
    }

    /// Column indices covered by the shape, left to right.
    #[must_use]
    pub fn horizontal_indices(&self) -> RangeInclusive<i32> {
        self.min_x..=self.max_x
    }

    /// Row indices covered by the shape, top to bottom.
    #[must_use]
    pub fn vertical_indices(&self) -> RangeInclusive<i32> {
        self.min_y..=self.max_y
    }
}
