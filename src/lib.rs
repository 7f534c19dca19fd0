#![warn(missing_docs)]

//! # Word searches
//!
//! A crate that generates word search puzzles and plays them.
//!
//! Words are placed at random along the allowed orientations and may overlap wherever their
//! letters agree, accents folded (an `Á` can share a cell with an `A`). Leftover cells get
//! random letters and a few cells become wildcards that match anything. A [`GameSession`]
//! then turns pairs of clicked positions into the words they spell.
//!
//! ```no_run
//! use word_search::{FindOutcome, GameSession, ManualWords};
//!
//! let mut session = GameSession::new();
//! session.set_dimensions(8, 8)?;
//! session.set_words(&mut ManualWords::from_iter(["lazy", "panic", "search"]), true)?;
//! session.start_game()?;
//!
//! let span = session.word_spans()["PANIC"];
//! session.find_word(span.first())?;
//! assert_eq!(session.find_word(span.last())?, FindOutcome::Found("PANIC".into()));
//! # Ok::<(), word_search::Error>(())
//! ```

mod builder;
mod cell;
mod error;
mod grid;
pub mod log;
mod matcher;
mod orientation;
mod position;
pub mod replay;
mod results;
mod session;
mod view;
mod words;

pub use builder::{build_puzzle, validate_dimensions, GameOptions, Puzzle};
pub use cell::{canonicalize, Cell, WILD_DISPLAY};
pub use error::{Error, Result};
pub use grid::{Grid, WordSpan, MAX_PLACEMENT_ATTEMPTS};
pub use matcher::{candidates, match_line, Candidate, Match};
pub use orientation::{classify, enumerate_line, Direction, LineKind, Orientation, Slope};
pub use position::Position;
pub use results::{GameResults, ResultsSink, ScoreFile};
pub use session::{FindOutcome, GameSession, GameState};
pub use view::{EmptyView, Message, View};
pub use words::{parse_words, AggregateWords, Dictionary, FileWords, ManualWords, WordSource};

/// The smallest number of lines or columns a grid can have.
pub const MIN_SIDE_LEN: usize = 5;

/// The largest number of lines or columns a grid can have.
pub const MAX_SIDE_LEN: usize = 12;
