use std::fmt::Display;

/// A zero-based `(line, col)` coordinate in the grid, ordered row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The line (row) index.
    pub line: usize,

    /// The column index.
    pub col: usize,
}

impl Position {
    /// Creates a position at `line` and `col`.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The spreadsheet-style letter of the column, `A` for column 0.
    pub fn col_label(&self) -> char {
        char::from_u32('A' as u32 + self.col as u32).unwrap_or('?')
    }

    /// Formats the position as `(line, COL)` for log messages.
    pub fn labelled(&self) -> String {
        format!("({}, {})", self.line, self.col_label())
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.line, self.col)
    }
}
