//! Turns a selected line of cells into the words it can spell.

use std::collections::BTreeSet;

use crate::{enumerate_line, Cell, Grid, Position};

/// One literal reading of a line of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The letters read, one actual glyph per cell.
    pub word: String,

    /// Sum of the points of the cells read.
    pub points: u32,
}

/// A word of the to-find set spelled by a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// The word as it appears in the to-find set.
    pub word: String,

    /// Points scored by the cells it was read from.
    pub points: u32,
}

/// Every string `cells` can spell, taking one actual glyph from each cell.
///
/// Cells holding several actuals (overlaps and wildcards) multiply the number of candidates.
pub fn candidates(cells: &[&Cell]) -> Vec<Candidate> {
    let mut candidates = vec![Candidate {
        word: String::new(),
        points: 0,
    }];

    for cell in cells {
        candidates = candidates
            .iter()
            .flat_map(|partial| {
                cell.actuals().iter().map(move |&actual| {
                    let mut word = partial.word.clone();
                    word.push(actual);
                    Candidate {
                        word,
                        points: partial.points + cell.points(),
                    }
                })
            })
            .collect();
    }

    candidates
}

/// Checks the line from `start` to `end` against `to_find`.
///
/// Every candidate reading, and its reversal, is looked up. Hits are removed from `to_find`
/// and returned in candidate order. A pair of positions that isn't horizontal, vertical or
/// diagonal, or that leaves the grid, matches nothing.
pub fn match_line(
    grid: &Grid,
    start: Position,
    end: Position,
    to_find: &mut BTreeSet<String>,
) -> Vec<Match> {
    if !grid.contains(start) || !grid.contains(end) {
        return Vec::new();
    }

    let cells: Option<Vec<&Cell>> = enumerate_line(start, end)
        .into_iter()
        .map(|pos| grid.get(pos))
        .collect();

    let cells = match cells {
        Some(cells) if !cells.is_empty() => cells,
        _ => return Vec::new(),
    };

    let mut matches = Vec::new();

    for candidate in candidates(&cells) {
        let word = candidate.word.to_uppercase();
        let reversed: String = word.chars().rev().collect();
        log::trace!("checking {word} / {reversed}");

        for option in [word, reversed] {
            if to_find.remove(&option) {
                matches.push(Match {
                    word: option,
                    points: candidate.points,
                });
            }
        }
    }

    matches
}
