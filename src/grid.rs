//! `grid` — sparse, unbounded grid keyed by [`Position`].
//!
//! Items are kept in an [`IndexMap`] so that iteration follows insertion
//! order. The placer relies on that: candidate anchors are tried in the order
//! their cells were committed, never in coordinate order.
//!
//! The grid also tracks its bounding [`Shape`]. Overwriting an existing
//! position does not move it in the iteration order and leaves the shape as it
//! was.

use indexmap::IndexMap;

use crate::position::Position;
use crate::shape::{Dimensions, Shape};

#[derive(Debug, Clone)]
pub struct SparseGrid<T> {
    items: IndexMap<Position, T>,
    shape: Shape,
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
            shape: Shape::default(),
        }
    }
}

impl<T> SparseGrid<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn contains(&self, position: &Position) -> bool {
        self.items.contains_key(position)
    }

    /// The item at `position`, or `None` if the coordinate is empty.
    #[must_use]
    pub fn get(&self, position: &Position) -> Option<&T> {
        self.items.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: &Position) -> Option<&mut T> {
        self.items.get_mut(position)
    }

    /// Store `item` at `position`, returning whatever was there before.
    pub fn put(&mut self, position: Position, item: T) -> Option<T> {
        let previous = self.items.insert(position, item);
        if previous.is_none() {
            self.shape.update(position);
        }
        previous
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// `(position, item)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &T)> {
        self.items.iter().map(|(position, item)| (*position, item))
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.shape.dimensions()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}
