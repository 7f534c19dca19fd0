//! Puzzle configuration and generation.

use std::collections::{BTreeMap, BTreeSet};

use rand::{seq::SliceRandom, Rng};

use crate::{Dictionary, Error, Grid, Orientation, Result, WordSpan, MAX_SIDE_LEN, MIN_SIDE_LEN};

/// The configuration for a puzzle. See [`build_puzzle`] for details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// The number of lines.
    pub lines: usize,

    /// The number of columns.
    pub cols: usize,

    /// The most words a single puzzle uses. `0` means every usable word.
    pub max_words: usize,

    /// Words shorter than this are never used.
    pub min_word_size: usize,

    /// The orientations words may be placed in.
    pub orientations: BTreeSet<Orientation>,

    /// How many cells are turned into wildcards after the grid is filled.
    pub wildcards: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            lines: MIN_SIDE_LEN,
            cols: MIN_SIDE_LEN,
            max_words: 5,
            min_word_size: 1,
            orientations: BTreeSet::from([Orientation::Horizontal, Orientation::Vertical]),
            wildcards: 1,
        }
    }
}

/// Checks that both sides are within `MIN_SIDE_LEN..=MAX_SIDE_LEN`.
pub fn validate_dimensions(lines: usize, cols: usize) -> Result<()> {
    let valid = |side: usize| (MIN_SIDE_LEN..=MAX_SIDE_LEN).contains(&side);

    if valid(lines) && valid(cols) {
        Ok(())
    } else {
        Err(Error::InvalidDimensions { lines, cols })
    }
}

/// A generated grid together with where each of its words was placed.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The filled grid.
    pub grid: Grid,

    /// Every word that was placed, with its span.
    pub placements: BTreeMap<String, WordSpan>,
}

impl Puzzle {
    /// The words hidden in the grid.
    pub fn words(&self) -> BTreeSet<String> {
        self.placements.keys().cloned().collect()
    }
}

/// Generates a puzzle from the words of `dictionary`.
///
/// A random subset of at most `options.max_words` usable words is chosen. Each word tries the
/// allowed orientations in random order and is dropped if none of them fits. The remaining
/// empty cells get random letters, then `options.wildcards` cells become wildcards.
///
/// Fails with [`Error::NoWords`] for an empty dictionary and with
/// [`Error::CouldNotPopulateMatrix`] when not a single word could be placed. Placement is random,
/// so callers usually retry the latter a few times.
pub fn build_puzzle<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    options: &GameOptions,
    rng: &mut R,
) -> Result<Puzzle> {
    if dictionary.is_empty() {
        return Err(Error::NoWords);
    }

    let (lines, cols) = (options.lines, options.cols);

    let mut candidates = dictionary.usable(lines, cols, options.min_word_size);
    candidates.shuffle(rng);
    if options.max_words > 0 {
        candidates.truncate(options.max_words);
    }

    let mut grid = Grid::new(lines, cols);
    let mut placements = BTreeMap::new();
    let mut dropped = BTreeSet::new();

    for word in candidates {
        let mut orientations: Vec<Orientation> = options.orientations.iter().copied().collect();
        orientations.shuffle(rng);

        let span = orientations
            .into_iter()
            .find_map(|orientation| grid.place_word(&word, orientation, rng).ok());

        match span {
            Some(span) => {
                placements.insert(word, span);
            }
            None => {
                log::debug!("dropping {word}, it fits no allowed orientation");
                dropped.insert(word);
            }
        }
    }

    if placements.is_empty() {
        return Err(Error::CouldNotPopulateMatrix {
            words: dropped,
            lines,
            cols,
        });
    }

    log::debug!("grid before filling:\n{grid}");

    grid.fill_blanks(rng);
    let wildcards = grid.place_wildcards(options.wildcards, rng);

    log::info!(
        "built a {lines}x{cols} puzzle with {} words and {wildcards} wildcards",
        placements.len()
    );

    Ok(Puzzle { grid, placements })
}
