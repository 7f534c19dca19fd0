//! The letter grid and the randomized word placement engine.

use std::fmt::Display;

use array2d::Array2D;
use rand::Rng;

use crate::{Cell, Direction, Error, Orientation, Position, Result};

/// Upper bound on spans tried by a single [`Grid::place_word`] call.
///
/// Every draw picks a span that wasn't tried yet, so a rejected span never uses up another
/// attempt. Grids with more legal spans than this (large grids, short words) may give up while
/// some spans were never tried. Raising it makes crowded grids more likely to fit a word, at the
/// cost of slower failures.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Describes where a word's letters are placed in the grid. Includes a beginning coordinate, a
/// length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordSpan {
    /// The position of the word's first letter.
    pub begin: Position,

    /// The length of the word, in letters.
    pub len: usize,

    /// The direction that the word goes in.
    pub direction: Direction,
}

impl WordSpan {
    /// Creates a new [WordSpan] with the given values for the beginning coordinate, the length,
    /// and the direction of the word.
    pub fn new(begin: Position, len: usize, direction: Direction) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// The position of the `i`-th letter, or `None` if it would fall off the top or left edge.
    fn position_at(&self, i: usize) -> Option<Position> {
        let (d_line, d_col) = self.direction.delta();
        let i = i as isize;

        Some(Position::new(
            self.begin.line.checked_add_signed(d_line * i)?,
            self.begin.col.checked_add_signed(d_col * i)?,
        ))
    }

    /// Returns all positions of the grid that the word spans across.
    pub fn indices(&self) -> Vec<Position> {
        (0..self.len).filter_map(|i| self.position_at(i)).collect()
    }

    /// The position of the first letter.
    pub fn first(&self) -> Position {
        self.begin
    }

    /// The position of the last letter.
    pub fn last(&self) -> Position {
        self.position_at(self.len.saturating_sub(1))
            .unwrap_or(self.begin)
    }

    /// Returns whether the word span is in bounds of the given grid dimensions.
    pub fn in_bounds(&self, lines: usize, cols: usize) -> bool {
        if self.len == 0 {
            return false;
        }

        // Test that both the beginning and ending coordinates are in the grid
        match self.position_at(self.len - 1) {
            Some(end) => {
                self.begin.line < lines && self.begin.col < cols && end.line < lines && end.col < cols
            }
            None => false,
        }
    }
}

/// A change made to the grid while writing a word, kept so it can be undone.
#[derive(Clone, Copy, Debug)]
enum Written {
    Created(Position),
    Added(Position, char),
}

/// A `lines × cols` matrix of optional cells, stored row-major in a flat buffer.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2D<Option<Cell>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(lines: usize, cols: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, lines, cols),
        }
    }

    /// The number of lines in the grid.
    pub fn lines(&self) -> usize {
        self.cells.num_rows()
    }

    /// The number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cells.num_columns()
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.line < self.lines() && pos.col < self.cols()
    }

    /// The cell at `pos`, or `None` if it's empty or out of bounds.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.line, pos.col).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(pos.line, pos.col).and_then(Option::as_mut)
    }

    /// Writes `cell` at `pos`. Out of bounds writes are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(pos.line, pos.col) {
            *slot = Some(cell);
        }
    }

    /// Empties the slot at `pos`.
    pub fn clear_cell(&mut self, pos: Position) {
        if let Some(slot) = self.cells.get_mut(pos.line, pos.col) {
            *slot = None;
        }
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.cells = Array2D::filled_with(None, self.lines(), self.cols());
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols();
        (0..self.lines()).flat_map(move |line| (0..cols).map(move |col| Position::new(line, col)))
    }

    /// Whether every slot holds a cell.
    pub fn is_full(&self) -> bool {
        self.cells.elements_row_major_iter().all(Option::is_some)
    }

    /// Every in-bounds span of length `len` under `orientation`, counting both directions of
    /// each axis.
    pub fn spans(&self, len: usize, orientation: Orientation) -> Vec<WordSpan> {
        let mut spans = Vec::new();

        for &direction in orientation.directions() {
            for begin in self.positions() {
                let span = WordSpan::new(begin, len, direction);
                if span.in_bounds(self.lines(), self.cols()) {
                    spans.push(span);
                }
            }
        }

        spans
    }

    /// Places `word` somewhere along `orientation`, overlapping existing letters where the
    /// displays agree.
    ///
    /// Spans are drawn uniformly at random among those not tried yet. A span that conflicts
    /// with an existing letter, or that would lie entirely on top of existing letters, is rolled
    /// back and never drawn again. Gives up with [`Error::WordCannotFit`] once every span was
    /// rejected or after [`MAX_PLACEMENT_ATTEMPTS`] spans were tried.
    pub fn place_word<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        orientation: Orientation,
        rng: &mut R,
    ) -> Result<WordSpan> {
        let chars: Vec<char> = word.chars().collect();
        let spans = self.spans(chars.len(), orientation);

        let mut untried: Vec<usize> = (0..spans.len()).collect();
        let mut attempts = 0;

        while !untried.is_empty() && attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;

            let i = untried.swap_remove(rng.gen_range(0..untried.len()));
            let span = spans[i];
            log::trace!("trying {word} at {:?} going {:?}", span.begin, span.direction);

            match self.write_word(&chars, &span) {
                Some((_, overlaps)) if overlaps < chars.len() => {
                    log::debug!(
                        "placed {word} {orientation}ly from {:?} to {:?} ({overlaps} overlaps, {attempts} attempts)",
                        span.first(),
                        span.last()
                    );
                    return Ok(span);
                }
                Some((written, _)) => {
                    // Lies entirely on top of existing letters.
                    self.rollback(&written);
                }
                None => {}
            }
        }

        log::debug!("{word} doesn't fit {orientation}ly after {attempts} attempts");

        Err(Error::WordCannotFit {
            word: word.to_string(),
            lines: self.lines(),
            cols: self.cols(),
        })
    }

    /// Writes `chars` along `span`. Returns the changes made and the overlap count, or `None`
    /// after undoing everything if a letter conflicted.
    fn write_word(&mut self, chars: &[char], span: &WordSpan) -> Option<(Vec<Written>, usize)> {
        let mut written = Vec::with_capacity(chars.len());
        let mut overlaps = 0;

        for (&ch, pos) in chars.iter().zip(span.indices()) {
            match self.get(pos).map(|cell| cell.matches_display(ch)) {
                None => {
                    self.set(pos, Cell::new(ch));
                    written.push(Written::Created(pos));
                }
                Some(true) => {
                    overlaps += 1;
                    if self.get_mut(pos).is_some_and(|cell| cell.try_add_actual(ch)) {
                        written.push(Written::Added(pos, ch));
                    }
                }
                Some(false) => {
                    self.rollback(&written);
                    return None;
                }
            }
        }

        Some((written, overlaps))
    }

    fn rollback(&mut self, written: &[Written]) {
        for change in written.iter().rev() {
            match *change {
                Written::Created(pos) => self.clear_cell(pos),
                Written::Added(pos, ch) => {
                    if let Some(cell) = self.get_mut(pos) {
                        cell.remove_actual(ch);
                    }
                }
            }
        }
    }

    /// Fills every empty slot with a uniformly random letter from `A` to `Z`.
    pub fn fill_blanks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for pos in self.positions().collect::<Vec<_>>() {
            if self.get(pos).is_none() {
                self.set(pos, Cell::new(random_letter(rng)));
            }
        }
    }

    /// Turns up to `n` distinct random cells into wildcards, returning how many were placed.
    ///
    /// An empty slot picked here first gets a random letter, so the wildcard still has an
    /// actual glyph.
    pub fn place_wildcards<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> usize {
        let mut placed = 0;

        while placed < n {
            let candidates: Vec<Position> = self
                .positions()
                .filter(|&pos| !self.get(pos).is_some_and(Cell::is_wild))
                .collect();

            if candidates.is_empty() {
                break;
            }

            let pos = candidates[rng.gen_range(0..candidates.len())];
            let cell = match self.get(pos) {
                Some(cell) => cell.clone(),
                None => Cell::new(random_letter(rng)),
            };

            log::trace!("wildcard at {pos:?} over {:?}", cell.actuals());
            self.set(pos, Cell::wild_from(&cell));
            placed += 1;
        }

        placed
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(b'A'..=b'Z'))
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = format!("+{}\n", "---+".repeat(self.cols()));

        f.write_str(&separator)?;
        for row in self.cells.rows_iter() {
            f.write_str("|")?;
            for cell in row {
                let glyph = cell.as_ref().map_or(' ', Cell::display);
                write!(f, " {glyph} |")?;
            }
            f.write_str("\n")?;
            f.write_str(&separator)?;
        }

        Ok(())
    }
}
