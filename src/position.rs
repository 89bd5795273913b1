//! Grid coordinates and word orientations.
//!
//! Coordinates are unbounded in every direction: `x` grows to the right
//! (along a row) and `y` grows downwards (along a column). The engine lays
//! the first word out from [`Position::ORIGIN`] and everything else is placed
//! relative to it, so negative coordinates are normal until the grid is packed.

use std::fmt;

/// Orientation of a placed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Along a row (left to right).
    Horizontal,
    /// Along a column (top to bottom).
    Vertical,
}

impl Axis {
    /// The other orientation.
    #[must_use]
    pub fn rotate(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// One step along this axis: `(1, 0)` or `(0, 1)`.
    #[must_use]
    pub fn unit_vector(self) -> Position {
        match self {
            Axis::Horizontal => Position::new(1, 0),
            Axis::Vertical => Position::new(0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// An immutable 2-D grid coordinate, compared and hashed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn shift(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Inclusive straight run from `self` to `other`.
    ///
    /// The two positions must share a column or a row and `other` must not
    /// come before `self`; otherwise the run is empty. A position paired with
    /// itself yields just that position.
    pub fn to(self, other: Position) -> impl Iterator<Item = Position> {
        let (step, count) = if self.x == other.x && self.y <= other.y {
            (Position::new(0, 1), other.y - self.y + 1)
        } else if self.y == other.y && self.x <= other.x {
            (Position::new(1, 0), other.x - self.x + 1)
        } else {
            (Position::ORIGIN, 0)
        };
        (0..count).map(move |i| self.shift(step.x * i, step.y * i))
    }

    /// The 4-neighbourhood: left, right, up, down.
    #[must_use]
    pub fn adjacent_positions(self) -> [Position; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// The two neighbours lying along `axis`.
    #[must_use]
    pub fn adjacent_positions_on_axis(self, axis: Axis) -> [Position; 2] {
        [self.prev_by_axis(axis), self.next_by_axis(axis)]
    }

    #[must_use]
    pub fn next_by_axis(self, axis: Axis) -> Position {
        let unit = axis.unit_vector();
        self.shift(unit.x, unit.y)
    }

    #[must_use]
    pub fn prev_by_axis(self, axis: Axis) -> Position {
        let unit = axis.unit_vector();
        self.shift(-unit.x, -unit.y)
    }

    /// Start and end of a run of `length` positions along `axis` chosen so
    /// that the run's `offset`-th position is `self`.
    ///
    /// This is how a word is aligned so that one of its letters lands on an
    /// existing cell. A `length` of zero is treated as one.
    #[must_use]
    pub fn line(self, length: usize, axis: Axis, offset: usize) -> (Position, Position) {
        let unit = axis.unit_vector();
        let span = to_coordinate(length.saturating_sub(1));
        let offset = to_coordinate(offset);
        let start = self.shift(-unit.x * offset, -unit.y * offset);
        let end = start.shift(unit.x * span, unit.y * span);
        (start, end)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Word lengths never get anywhere near i32::MAX; clamp rather than wrap.
fn to_coordinate(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_swaps_axes() {
        assert_eq!(Axis::Horizontal.rotate(), Axis::Vertical);
        assert_eq!(Axis::Vertical.rotate(), Axis::Horizontal);
        assert_eq!(Axis::Horizontal.rotate().rotate(), Axis::Horizontal);
    }

    #[test]
    fn test_unit_vectors() {
        assert_eq!(Axis::Horizontal.unit_vector(), Position::new(1, 0));
        assert_eq!(Axis::Vertical.unit_vector(), Position::new(0, 1));
    }

    #[test]
    fn test_shift() {
        assert_eq!(Position::new(2, -3).shift(-2, 5), Position::new(0, 2));
        assert_eq!(Position::ORIGIN.shift(0, 0), Position::ORIGIN);
    }

    #[test]
    fn test_to_along_row() {
        let run: Vec<_> = Position::new(-1, 4).to(Position::new(2, 4)).collect();
        assert_eq!(
            run,
            vec![
                Position::new(-1, 4),
                Position::new(0, 4),
                Position::new(1, 4),
                Position::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_to_along_column() {
        let run: Vec<_> = Position::new(3, -2).to(Position::new(3, 0)).collect();
        assert_eq!(
            run,
            vec![Position::new(3, -2), Position::new(3, -1), Position::new(3, 0)]
        );
    }

    #[test]
    fn test_to_single_position() {
        let p = Position::new(5, 5);
        assert_eq!(p.to(p).collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn test_to_unaligned_or_reversed_is_empty() {
        assert_eq!(Position::new(0, 0).to(Position::new(1, 1)).count(), 0);
        assert_eq!(Position::new(3, 0).to(Position::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_adjacent_positions() {
        let around = Position::new(1, 1).adjacent_positions();
        assert_eq!(
            around,
            [
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_adjacent_positions_on_axis() {
        let p = Position::new(0, 0);
        assert_eq!(
            p.adjacent_positions_on_axis(Axis::Horizontal),
            [Position::new(-1, 0), Position::new(1, 0)]
        );
        assert_eq!(
            p.adjacent_positions_on_axis(Axis::Vertical),
            [Position::new(0, -1), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_next_and_prev_by_axis() {
        let p = Position::new(4, 7);
        assert_eq!(p.next_by_axis(Axis::Horizontal), Position::new(5, 7));
        assert_eq!(p.prev_by_axis(Axis::Horizontal), Position::new(3, 7));
        assert_eq!(p.next_by_axis(Axis::Vertical), Position::new(4, 8));
        assert_eq!(p.prev_by_axis(Axis::Vertical), Position::new(4, 6));
    }

    #[test]
    fn test_line_without_offset() {
        let (start, end) = Position::ORIGIN.line(3, Axis::Horizontal, 0);
        assert_eq!(start, Position::new(0, 0));
        assert_eq!(end, Position::new(2, 0));
    }

    #[test]
    fn test_line_with_offset_keeps_reference_on_offset_letter() {
        // "odd" anchored on its middle 'd' at (0, 0)
        let (start, end) = Position::ORIGIN.line(3, Axis::Vertical, 1);
        assert_eq!(start, Position::new(0, -1));
        assert_eq!(end, Position::new(0, 1));
        assert_eq!(start.to(end).nth(1), Some(Position::ORIGIN));
    }

    #[test]
    fn test_line_single_letter() {
        let p = Position::new(2, 2);
        assert_eq!(p.line(1, Axis::Vertical, 0), (p, p));
        assert_eq!(p.line(0, Axis::Vertical, 0), (p, p));
    }
}
