//! `packer` — move a finished grid to a non-negative origin.
//!
//! Packing is a pure translation: every letter is shifted by the same offset
//! so that the smallest column and row become zero. Dimensions are unchanged
//! and the letters keep their insertion order.

use crate::grid::SparseGrid;
use crate::letter::Letter;
use crate::position::Position;
use crate::shape::{Dimensions, Shape};
use crate::text_view;

/// A grid whose top-left corner is `(0, 0)`, ready for display.
#[derive(Debug, Clone)]
pub struct PackedGrid {
    grid: SparseGrid<Letter>,
    offset: Position,
}

impl PackedGrid {
    /// Letters in the order their cells were committed.
    pub fn letters(&self) -> impl Iterator<Item = &Letter> {
        self.grid.items()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    #[must_use]
    pub fn grid(&self) -> &SparseGrid<Letter> {
        &self.grid
    }

    /// The translation that was applied; all zeros if the source grid already
    /// started at the origin.
    #[must_use]
    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Apply the same translation to letters reported against the unpacked
    /// grid.
    #[must_use]
    pub fn translate(&self, letters: &[Letter]) -> Vec<Letter> {
        letters
            .iter()
            .map(|letter| letter.shifted(self.offset.x, self.offset.y))
            .collect()
    }

    #[must_use]
    pub fn text_view(&self) -> String {
        text_view::render(&self.grid)
    }
}

/// Offset that brings the shape's minimum column and row up to zero.
#[must_use]
pub fn packing_offset(shape: &Shape) -> Position {
    Position::new((-shape.min_x).max(0), (-shape.min_y).max(0))
}

/// Pack any grid of letters. Packing an already packed grid is a no-op.
#[must_use]
pub fn pack<T: AsRef<Letter>>(source: &SparseGrid<T>) -> PackedGrid {
    let offset = packing_offset(source.shape());
    let mut grid = SparseGrid::new();
    for item in source.items() {
        let letter = item.as_ref().shifted(offset.x, offset.y);
        grid.put(letter.position, letter);
    }
    PackedGrid { grid, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter_grid(letters: &[(char, i32, i32)]) -> SparseGrid<Letter> {
        let mut grid = SparseGrid::new();
        for &(character, x, y) in letters {
            let position = Position::new(x, y);
            grid.put(position, Letter::new(character, position));
        }
        grid
    }

    #[test]
    fn test_pack_shifts_to_origin() {
        let source = letter_grid(&[('a', 0, 0), ('b', -2, 0), ('c', 0, -3)]);
        let packed = pack(&source);
        assert_eq!(packed.offset(), Position::new(2, 3));
        let letters: Vec<_> = packed.letters().copied().collect();
        assert_eq!(
            letters,
            vec![
                Letter::new('a', Position::new(2, 3)),
                Letter::new('b', Position::new(0, 3)),
                Letter::new('c', Position::new(2, 0)),
            ]
        );
        assert_eq!(packed.dimensions(), source.dimensions());
        assert_eq!(packed.grid().shape().min_x, 0);
        assert_eq!(packed.grid().shape().min_y, 0);
    }

    #[test]
    fn test_pack_non_negative_grid_is_noop() {
        let source = letter_grid(&[('a', 0, 0), ('b', 1, 0), ('c', 1, 1)]);
        let packed = pack(&source);
        assert_eq!(packed.offset(), Position::ORIGIN);
        assert!(packed.letters().eq(source.items()));
    }

    #[test]
    fn test_pack_twice_is_same() {
        let source = letter_grid(&[('x', -1, -1), ('y', 0, -1), ('z', 0, 0)]);
        let once = pack(&source);
        let twice = pack(once.grid());
        assert!(once.letters().eq(twice.letters()));
        assert_eq!(once.dimensions(), twice.dimensions());
        assert_eq!(twice.offset(), Position::ORIGIN);
    }

    #[test]
    fn test_translate_matches_packed_letters() {
        let source = letter_grid(&[('p', -1, 0), ('q', 0, 0)]);
        let packed = pack(&source);
        let word = [Letter::new('p', Position::new(-1, 0))];
        assert_eq!(packed.translate(&word), vec![Letter::new('p', Position::new(0, 0))]);
    }

    #[test]
    fn test_packing_offset_ignores_positive_minimums() {
        let shape = Shape { min_x: 2, min_y: -4, max_x: 5, max_y: 0 };
        assert_eq!(packing_offset(&shape), Position::new(0, 4));
    }
}
