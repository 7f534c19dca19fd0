//! End of game results and where they're saved.

use std::{
    collections::BTreeSet,
    fmt::Display,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::Result;

/// A snapshot of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameResults {
    /// Every word that was hidden in the grid.
    pub all_words: BTreeSet<String>,

    /// The words the player found.
    pub found_words: BTreeSet<String>,

    /// Whether the game was a replay.
    pub is_replay: bool,
}

impl GameResults {
    /// The share of words found, from 0 to 100.
    pub fn percent_found(&self) -> f64 {
        if self.all_words.is_empty() {
            return 0.0;
        }

        100.0 * self.found_words.len() as f64 / self.all_words.len() as f64
    }

    /// A human readable report listing every word, `+` for found and `-` for missed.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Display for GameResults {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\twords found:\t{}", self.found_words.len())?;
        writeln!(f, "\ttotal of words:\t{}", self.all_words.len())?;
        writeln!(f, "\tpercentage of words found:\t{:.2}%", self.percent_found())?;
        writeln!(f, "\nwords in game:")?;

        for word in &self.all_words {
            let mark = if self.found_words.contains(word) { '+' } else { '-' };
            writeln!(f, "\t{mark} {word}")?;
        }

        Ok(())
    }
}

/// Somewhere finished games are recorded.
pub trait ResultsSink {
    /// Records `results`.
    fn save(&mut self, results: &GameResults) -> Result<()>;
}

/// Appends one `"<percent>%"` line per game to a text file.
#[derive(Clone, Debug)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    /// Scores will be appended to `path`, which is created when missing.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResultsSink for ScoreFile {
    fn save(&mut self, results: &GameResults) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{:.2}%", results.percent_found())?;
        Ok(())
    }
}
