//! The callbacks a game session makes towards whatever presents it.

use std::fmt::Display;

use crate::{enumerate_line, GameResults, Position};

/// A log line emitted by the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// A cell was clicked.
    Click {
        /// Where the click landed.
        pos: Position,
        /// The glyph displayed there.
        glyph: char,
    },

    /// A word was found along the line from `start` to `end`.
    WordFound {
        /// The first click of the selection.
        start: Position,
        /// The second click of the selection.
        end: Position,
        /// The word that was found.
        word: String,
    },

    /// Points scored for a found word.
    WordPoints {
        /// The word that was found.
        word: String,
        /// The points it scored.
        points: u32,
    },

    /// A word starts or ends at `pos`.
    Hint {
        /// One end of a word still to be found.
        pos: Position,
    },
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Message::Click { pos, glyph } => write!(f, "{} -> {glyph}", pos.labelled()),
            Message::WordFound { start, end, word } => {
                let cells: Vec<String> = enumerate_line(*start, *end)
                    .iter()
                    .map(Position::labelled)
                    .collect();
                write!(f, "\"{word}\" -> {}.", cells.join(", "))
            }
            Message::WordPoints { word, points } => write!(f, "\"{word}\" = {points} points."),
            Message::Hint { pos } => write!(f, "hint: a word starts or ends at {}", pos.labelled()),
        }
    }
}

/// Receives the game's notifications. Every method does nothing by default.
pub trait View {
    /// A new game (or a replay) began.
    fn game_started(&mut self) {}

    /// A word was found along the line from `start` to `end`.
    fn word_found(&mut self, _start: Position, _end: Position) {}

    /// The game ended.
    fn game_ended(&mut self, _results: &GameResults) {}

    /// A log line for the player.
    fn update(&mut self, _message: &Message) {}

    /// A click was made, by the player or by a replay.
    fn click(&mut self, _pos: Position) {}
}

/// A view that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyView;

impl View for EmptyView {}
