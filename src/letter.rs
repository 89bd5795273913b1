use std::fmt;

use crate::position::{Axis, Position};

/// One character at one coordinate. This is what leaves the engine: packed
/// grids and accepted words are reported as lists of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Letter {
    pub character: char,
    pub position: Position,
}

impl Letter {
    #[must_use]
    pub const fn new(character: char, position: Position) -> Self {
        Self { character, position }
    }

    /// The same character moved by `(dx, dy)`.
    #[must_use]
    pub fn shifted(&self, dx: i32, dy: i32) -> Letter {
        Letter::new(self.character, self.position.shift(dx, dy))
    }
}

impl AsRef<Letter> for Letter {
    fn as_ref(&self) -> &Letter {
        self
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.character, self.position)
    }
}

/// A placed letter inside an unpacked grid.
///
/// `axis` is the orientation of the word that created the cell. Once another
/// word crosses the cell it is marked intersected and is never offered as an
/// anchor again; the flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    letter: Letter,
    axis: Axis,
    intersected: bool,
}

impl Cell {
    #[must_use]
    pub fn new(letter: Letter, axis: Axis) -> Self {
        Self { letter, axis, intersected: false }
    }

    #[must_use]
    pub fn letter(&self) -> &Letter {
        &self.letter
    }

    #[must_use]
    pub fn character(&self) -> char {
        self.letter.character
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.letter.position
    }

    /// Orientation of the word that first created this cell.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn is_intersected(&self) -> bool {
        self.intersected
    }

    pub(crate) fn mark_intersected(&mut self) {
        self.intersected = true;
    }
}

impl AsRef<Letter> for Cell {
    fn as_ref(&self) -> &Letter {
        &self.letter
    }
}
