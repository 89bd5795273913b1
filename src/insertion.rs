//! `insertion` — feasibility check for one hypothetical word placement.
//!
//! An [`Insertion`] is a word laid out from `start` to `end` along `axis`,
//! evaluated against the current grid without touching it. Every derived set
//! is computed on first use and cached for the lifetime of the candidate, so
//! a candidate that fails its first check never pays for the others.
//!
//! A candidate is valid when:
//! - every position it shares with the grid already holds the same character;
//! - every occupied neighbour it would touch is one the crossing allows
//!   (see [`Insertion::allowed_touching_positions`]);
//! - the grid, extended by the candidate, still fits the maximum dimensions.

use std::collections::HashSet;
use std::fmt;

use once_cell::unsync::OnceCell;

use crate::grid::SparseGrid;
use crate::letter::{Cell, Letter};
use crate::position::{Axis, Position};
use crate::shape::Dimensions;

/// Why a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// It would overwrite an existing letter with a different character.
    IllegalOverlap,
    /// It would touch an unrelated word without crossing it.
    TouchViolation,
    /// The grid would outgrow the maximum dimensions.
    ExceedsMaximumDimensions,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::IllegalOverlap => write!(f, "conflicting overlap"),
            Rejection::TouchViolation => write!(f, "touches an unrelated word"),
            Rejection::ExceedsMaximumDimensions => write!(f, "exceeds maximum dimensions"),
        }
    }
}

pub struct Insertion<'a> {
    word: &'a str,
    start: Position,
    end: Position,
    axis: Axis,
    grid: &'a SparseGrid<Cell>,
    maximum_dimensions: Option<Dimensions>,

    letters: OnceCell<Vec<Letter>>,
    overlapping: OnceCell<HashSet<Position>>,
    illegal_overlaps: OnceCell<HashSet<Position>>,
    touching: OnceCell<HashSet<Position>>,
    allowed_touching: OnceCell<HashSet<Position>>,
}

impl<'a> Insertion<'a> {
    #[must_use]
    pub fn new(
        word: &'a str,
        start: Position,
        end: Position,
        axis: Axis,
        grid: &'a SparseGrid<Cell>,
        maximum_dimensions: Option<Dimensions>,
    ) -> Self {
        Self {
            word,
            start,
            end,
            axis,
            grid,
            maximum_dimensions,
            letters: OnceCell::new(),
            overlapping: OnceCell::new(),
            illegal_overlaps: OnceCell::new(),
            touching: OnceCell::new(),
            allowed_touching: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn word(&self) -> &'a str {
        self.word
    }

    #[must_use]
    pub fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Position {
        self.end
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The letters the word would occupy, in word order.
    pub fn letters(&self) -> &[Letter] {
        self.letters.get_or_init(|| {
            self.start
                .to(self.end)
                .zip(self.word.chars())
                .map(|(position, character)| Letter::new(character, position))
                .collect()
        })
    }

    /// Positions of the candidate that are already occupied.
    pub fn overlapping_positions(&self) -> &HashSet<Position> {
        self.overlapping.get_or_init(|| {
            self.letters()
                .iter()
                .map(|letter| letter.position)
                .filter(|position| self.grid.contains(position))
                .collect()
        })
    }

    /// Overlapping positions whose existing character differs from ours.
    pub fn illegal_overlaps(&self) -> &HashSet<Position> {
        self.illegal_overlaps.get_or_init(|| {
            self.letters()
                .iter()
                .filter(|letter| {
                    self.grid
                        .get(&letter.position)
                        .is_some_and(|cell| cell.character() != letter.character)
                })
                .map(|letter| letter.position)
                .collect()
        })
    }

    #[must_use]
    pub fn has_illegal_overlaps(&self) -> bool {
        !self.illegal_overlaps().is_empty()
    }

    /// Occupied positions the candidate would touch: the perpendicular
    /// neighbours of each of its letters, plus the positions just before its
    /// start and just after its end.
    pub fn touching_positions(&self) -> &HashSet<Position> {
        self.touching.get_or_init(|| {
            let across = self.axis.rotate();
            self.letters()
                .iter()
                .flat_map(|letter| letter.position.adjacent_positions_on_axis(across))
                .chain([
                    self.start.prev_by_axis(self.axis),
                    self.end.next_by_axis(self.axis),
                ])
                .filter(|position| self.grid.contains(position))
                .collect()
        })
    }

    /// Occupied neighbours a crossing is permitted to have: for each
    /// overlapped cell, its two neighbours along the axis of the word that
    /// owns it.
    pub fn allowed_touching_positions(&self) -> &HashSet<Position> {
        self.allowed_touching.get_or_init(|| {
            self.overlapping_positions()
                .iter()
                .filter_map(|position| self.grid.get(position))
                .flat_map(|cell| cell.position().adjacent_positions_on_axis(cell.axis()))
                .filter(|position| self.grid.contains(position))
                .collect()
        })
    }

    #[must_use]
    pub fn has_touch_violation(&self) -> bool {
        self.touching_positions()
            .difference(self.allowed_touching_positions())
            .next()
            .is_some()
    }

    #[must_use]
    pub fn exceeds_maximum_dimensions(&self) -> bool {
        self.maximum_dimensions.is_some_and(|ceiling| {
            !self.grid.shape().fits_with(&[self.start, self.end], &ceiling)
        })
    }

    /// The first failed check, cheapest first, or `None` for a valid candidate.
    #[must_use]
    pub fn rejection(&self) -> Option<Rejection> {
        if self.exceeds_maximum_dimensions() {
            Some(Rejection::ExceedsMaximumDimensions)
        } else if self.has_illegal_overlaps() {
            Some(Rejection::IllegalOverlap)
        } else if self.has_touch_violation() {
            Some(Rejection::TouchViolation)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rejection().is_none()
    }

    /// Consume the candidate, keeping what a commit needs: the letters and
    /// the overlapped positions.
    pub(crate) fn into_parts(self) -> (Vec<Letter>, Vec<Position>) {
        // make sure both caches are filled before taking them apart
        self.overlapping_positions();
        self.letters();
        let overlapping = self.overlapping.into_inner().unwrap_or_default();
        let letters = self.letters.into_inner().unwrap_or_default();
        let overlapping = letters
            .iter()
            .map(|letter| letter.position)
            .filter(|position| overlapping.contains(position))
            .collect();
        (letters, overlapping)
    }
}

impl fmt::Debug for Insertion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Insertion")
            .field("word", &self.word)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("axis", &self.axis)
            .finish_non_exhaustive()
    }
}
