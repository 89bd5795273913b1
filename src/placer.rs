//! The greedy placer.
//!
//! # Algorithm
//!
//! The first word goes in horizontally at the origin. Every later word is
//! tried against the existing cells in the order they were committed:
//!
//! 1. skip cells that are already intersected or whose character does not
//!    occur in the word;
//! 2. for each occurrence of that character in the word, left to right, lay
//!    the word perpendicular to the cell's original axis so that the
//!    occurrence lands on the cell;
//! 3. the first valid [`Insertion`] wins: its new letters are committed and
//!    every cell it overlaps is marked intersected.
//!
//! If no cell/occurrence pair works the word is rejected for good. There is no
//! backtracking and no retry once later words are in.
//!
//! # Examples
//!
//! ```
//! use crossgrid::placer::CrosswordGrid;
//!
//! let mut grid = CrosswordGrid::new(None);
//! assert!(grid.add_word("dig").is_some());
//! assert!(grid.add_word("dry").is_some());
//! assert!(grid.add_word("nope").is_none());
//! assert_eq!(grid.text_view(), "DIG\nR■■\nY■■");
//! ```

use log::{debug, trace};

use crate::grid::SparseGrid;
use crate::insertion::Insertion;
use crate::letter::{Cell, Letter};
use crate::packer::{self, PackedGrid};
use crate::position::{Axis, Position};
use crate::shape::{Dimensions, Shape};
use crate::text_view;

const START_POSITION: Position = Position::ORIGIN;
const STARTING_AXIS: Axis = Axis::Horizontal;

/// An unpacked crossword grid: it grows in every direction from the origin,
/// bounded only by the optional maximum dimensions.
#[derive(Debug, Clone, Default)]
pub struct CrosswordGrid {
    grid: SparseGrid<Cell>,
    maximum_dimensions: Option<Dimensions>,
}

impl CrosswordGrid {
    #[must_use]
    pub fn new(maximum_dimensions: Option<Dimensions>) -> Self {
        Self {
            grid: SparseGrid::new(),
            maximum_dimensions,
        }
    }

    /// Try to fit `word` into the grid.
    ///
    /// Returns the letters the word occupies (crossings included) on success,
    /// `None` if it could not be placed.
    pub fn add_word(&mut self, word: &str) -> Option<Vec<Letter>> {
        if self.grid.is_empty() {
            Some(self.place_first(word))
        } else {
            self.place_next(word)
        }
    }

    /// Lay `word` horizontally from the origin. Always succeeds; callers only
    /// use it on an empty grid.
    pub fn place_first(&mut self, word: &str) -> Vec<Letter> {
        let (start, end) = START_POSITION.line(word.chars().count(), STARTING_AXIS, 0);
        let (letters, _) = Insertion::new(
            word,
            start,
            end,
            STARTING_AXIS,
            &self.grid,
            self.maximum_dimensions,
        )
        .into_parts();
        debug!("Placed first word '{word}' {STARTING_AXIS} from {start} to {end}");
        self.commit(&letters, &[], STARTING_AXIS);
        letters
    }

    /// Cross `word` with an existing, non-intersected cell.
    pub fn place_next(&mut self, word: &str) -> Option<Vec<Letter>> {
        let Some((letters, overlapping, axis)) = self.first_valid_insertion(word) else {
            debug!("Excluded '{word}': no valid crossing");
            return None;
        };
        self.commit(&letters, &overlapping, axis);
        Some(letters)
    }

    fn first_valid_insertion(&self, word: &str) -> Option<(Vec<Letter>, Vec<Position>, Axis)> {
        let chars: Vec<char> = word.chars().collect();

        for anchor in self.grid.items() {
            if anchor.is_intersected() || !chars.contains(&anchor.character()) {
                continue;
            }
            let axis = anchor.axis().rotate();
            let offsets = chars
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == anchor.character())
                .map(|(offset, _)| offset);

            for offset in offsets {
                let (start, end) = anchor.position().line(chars.len(), axis, offset);
                let insertion = Insertion::new(
                    word,
                    start,
                    end,
                    axis,
                    &self.grid,
                    self.maximum_dimensions,
                );
                match insertion.rejection() {
                    None => {
                        debug!(
                            "Placed '{word}' {axis} from {start} to {end}, crossing '{}' at {}",
                            anchor.character(),
                            anchor.position()
                        );
                        let (letters, overlapping) = insertion.into_parts();
                        return Some((letters, overlapping, axis));
                    }
                    Some(reason) => {
                        trace!("Rejected '{word}' {axis} from {start} to {end}: {reason}");
                    }
                }
            }
        }

        None
    }

    // Only ever called with a fully validated candidate.
    fn commit(&mut self, letters: &[Letter], overlapping: &[Position], axis: Axis) {
        for letter in letters {
            if !self.grid.contains(&letter.position) {
                self.grid.put(letter.position, Cell::new(*letter, axis));
            }
        }
        for position in overlapping {
            if let Some(cell) = self.grid.get_mut(position) {
                cell.mark_intersected();
            }
        }
    }

    /// The cell at `(x, y)`, if any.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.grid.get(&Position::new(x, y))
    }

    /// Cells in the order they were committed.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.items()
    }

    #[must_use]
    pub fn grid(&self) -> &SparseGrid<Cell> {
        &self.grid
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        self.grid.shape()
    }

    #[must_use]
    pub fn maximum_dimensions(&self) -> Option<Dimensions> {
        self.maximum_dimensions
    }

    /// Translate the grid to a non-negative origin.
    #[must_use]
    pub fn pack(&self) -> PackedGrid {
        packer::pack(&self.grid)
    }

    /// Human-readable dump of the grid (uppercase letters, `■` for blanks).
    #[must_use]
    pub fn text_view(&self) -> String {
        text_view::render(&self.grid)
    }
}
