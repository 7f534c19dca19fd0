//! Word orientations, placement directions and the geometry of a selected line.

use std::fmt::Display;

use crate::Position;

/// An axis a word may be placed along. Each orientation has a forward and a backward direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Along a line, left to right or right to left.
    Horizontal,

    /// Along a column, top to bottom or bottom to top.
    Vertical,

    /// Along either 45° diagonal, in any of the four directions.
    Diagonal,
}

impl Orientation {
    /// Every orientation.
    pub const ALL: [Orientation; 3] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::Diagonal,
    ];

    /// The directions a word can be written in under this orientation.
    pub fn directions(self) -> &'static [Direction] {
        use Direction::*;

        match self {
            Orientation::Horizontal => &[Right, Left],
            Orientation::Vertical => &[Down, Up],
            Orientation::Diagonal => &[
                DiagonalDownRight,
                DiagonalUpLeft,
                DiagonalDownLeft,
                DiagonalUpRight,
            ],
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::Diagonal => "diagonal",
        };

        f.write_str(name)
    }
}

/// The direction a word is written in from its first letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The word goes up from the start position.
    Up,

    /// The word goes down from the start position.
    Down,

    /// The word goes left from the start position.
    Left,

    /// The word goes right from the start position.
    Right,

    /// The word goes diagonally up and left from the start position.
    DiagonalUpLeft,

    /// The word goes diagonally up and right from the start position.
    DiagonalUpRight,

    /// The word goes diagonally down and left from the start position.
    DiagonalDownLeft,

    /// The word goes diagonally down and right from the start position.
    DiagonalDownRight,
}

impl Direction {
    /// The `(line, col)` step taken between two consecutive letters.
    pub fn delta(self) -> (isize, isize) {
        use Direction::*;

        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
            DiagonalUpLeft => (-1, -1),
            DiagonalUpRight => (-1, 1),
            DiagonalDownLeft => (1, -1),
            DiagonalDownRight => (1, 1),
        }
    }
}

/// The sign of a diagonal's slope, measured as `Δline / Δcol`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slope {
    /// Line and column grow together.
    Positive,

    /// Line grows while column shrinks.
    Negative,
}

/// How two selected positions relate to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Both positions are on the same line.
    Horizontal,

    /// Both positions are on the same column.
    Vertical,

    /// The positions lie on a 45° diagonal.
    Diagonal(Slope),

    /// No straight line of cells joins the positions.
    Invalid,
}

/// Classifies the line drawn from `start` to `end`.
pub fn classify(start: Position, end: Position) -> LineKind {
    if start.line == end.line {
        return LineKind::Horizontal;
    }
    if start.col == end.col {
        return LineKind::Vertical;
    }

    if start.line.abs_diff(end.line) != start.col.abs_diff(end.col) {
        LineKind::Invalid
    } else if (start.line < end.line) == (start.col < end.col) {
        LineKind::Diagonal(Slope::Positive)
    } else {
        LineKind::Diagonal(Slope::Negative)
    }
}

/// Lists the positions between `start` and `end` inclusive, from the lower to the higher index.
///
/// Diagonals are walked by ascending line. An [`LineKind::Invalid`] pair yields no positions.
pub fn enumerate_line(start: Position, end: Position) -> Vec<Position> {
    let (top, bottom) = (start.line.min(end.line), start.line.max(end.line));
    let (left, right) = (start.col.min(end.col), start.col.max(end.col));

    match classify(start, end) {
        LineKind::Horizontal => (left..=right).map(|col| Position::new(start.line, col)).collect(),
        LineKind::Vertical => (top..=bottom).map(|line| Position::new(line, start.col)).collect(),
        LineKind::Diagonal(Slope::Positive) => (0..=bottom - top)
            .map(|i| Position::new(top + i, left + i))
            .collect(),
        LineKind::Diagonal(Slope::Negative) => (0..=bottom - top)
            .map(|i| Position::new(top + i, right - i))
            .collect(),
        LineKind::Invalid => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    #[test]
    fn classifies_axes() {
        assert_eq!(classify(p(2, 0), p(2, 5)), LineKind::Horizontal);
        assert_eq!(classify(p(0, 3), p(4, 3)), LineKind::Vertical);
        assert_eq!(classify(p(1, 1), p(3, 3)), LineKind::Diagonal(Slope::Positive));
        assert_eq!(classify(p(3, 3), p(1, 1)), LineKind::Diagonal(Slope::Positive));
        assert_eq!(classify(p(0, 4), p(4, 0)), LineKind::Diagonal(Slope::Negative));
        assert_eq!(classify(p(0, 0), p(1, 2)), LineKind::Invalid);
    }

    #[test]
    fn classifies_far_positions_without_wrapping() {
        assert_eq!(classify(p(0, 0), p(0, usize::MAX)), LineKind::Horizontal);
        assert_eq!(
            classify(p(0, 0), p(usize::MAX, usize::MAX)),
            LineKind::Diagonal(Slope::Positive)
        );
        assert_eq!(
            classify(p(usize::MAX, 0), p(0, usize::MAX)),
            LineKind::Diagonal(Slope::Negative)
        );
        assert_eq!(classify(p(1, 0), p(usize::MAX, 1)), LineKind::Invalid);
    }

    #[test]
    fn same_position_is_a_single_cell_line() {
        assert_eq!(enumerate_line(p(1, 1), p(1, 1)), vec![p(1, 1)]);
    }

    #[test]
    fn enumerates_from_lower_index() {
        assert_eq!(enumerate_line(p(0, 3), p(0, 1)), vec![p(0, 1), p(0, 2), p(0, 3)]);
        assert_eq!(enumerate_line(p(2, 4), p(0, 4)), vec![p(0, 4), p(1, 4), p(2, 4)]);
        assert_eq!(enumerate_line(p(2, 2), p(0, 0)), vec![p(0, 0), p(1, 1), p(2, 2)]);
        assert_eq!(enumerate_line(p(2, 0), p(0, 2)), vec![p(0, 2), p(1, 1), p(2, 0)]);
        assert!(enumerate_line(p(0, 0), p(2, 1)).is_empty());
    }

    #[test]
    fn orientation_direction_counts() {
        assert_eq!(Orientation::Horizontal.directions().len(), 2);
        assert_eq!(Orientation::Vertical.directions().len(), 2);
        assert_eq!(Orientation::Diagonal.directions().len(), 4);
    }
}
