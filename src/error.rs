use std::collections::BTreeSet;

use crate::{MAX_SIDE_LEN, MIN_SIDE_LEN};

/// An error that happened while configuring, generating or playing a word search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested number of lines or columns lies outside `MIN_SIDE_LEN..=MAX_SIDE_LEN`.
    #[error(
        "grid dimensions {lines} lines x {cols} columns are invalid, each side must be between {} and {}",
        MIN_SIDE_LEN,
        MAX_SIDE_LEN
    )]
    InvalidDimensions {
        /// The rejected number of lines.
        lines: usize,
        /// The rejected number of columns.
        cols: usize,
    },

    /// The game configuration was changed while a game is running.
    #[error("the game configuration can't be changed while in game")]
    InvalidInGameChange,

    /// A game was started before the grid dimensions were set.
    #[error("no grid dimensions were defined")]
    NoDimensionsDefined,

    /// A game was started with an empty dictionary.
    #[error("no words were provided")]
    NoWords,

    /// A single word exhausted every placement attempt for one orientation.
    #[error("the word {word:?} can't fit in a {lines}x{cols} grid")]
    WordCannotFit {
        /// The word that could not be placed.
        word: String,
        /// Number of lines of the grid.
        lines: usize,
        /// Number of columns of the grid.
        cols: usize,
    },

    /// Not a single candidate word could be placed in the grid.
    #[error("could not populate a {lines}x{cols} grid with any of the words {words:?}")]
    CouldNotPopulateMatrix {
        /// The words that were tried and dropped.
        words: BTreeSet<String>,
        /// Number of lines of the grid.
        lines: usize,
        /// Number of columns of the grid.
        cols: usize,
    },

    /// The operation requires a running game.
    #[error("there is no game running")]
    NotInGame,

    /// Player input arrived while a replay is driving the session.
    #[error("a replay is in progress")]
    ReplayInProgress,

    /// Reading a word source or writing the score file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
