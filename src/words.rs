//! Word sources and the dictionary of words a puzzle draws from.

use std::{
    collections::{BTreeSet, VecDeque},
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::Path,
};

use crate::Result;

/// A pull-based supplier of raw text lines.
pub trait WordSource {
    /// The next line of text, or `None` once the source is exhausted.
    fn next_line(&mut self) -> Option<String>;
}

/// Lines provided by hand, e.g. typed in by the player.
#[derive(Clone, Debug, Default)]
pub struct ManualWords {
    lines: VecDeque<String>,
}

impl ManualWords {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one line.
    pub fn provide(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    /// Queues every line of `lines`.
    pub fn provide_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for ManualWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut words = ManualWords::new();
        words.provide_all(iter);
        words
    }
}

impl WordSource for ManualWords {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }
}

/// Lines read from a text file.
#[derive(Debug)]
pub struct FileWords {
    lines: Lines<BufReader<File>>,
}

impl FileWords {
    /// Opens `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl WordSource for FileWords {
    fn next_line(&mut self) -> Option<String> {
        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(err) => {
                log::warn!("stopped reading words: {err}");
                None
            }
        }
    }
}

/// Drains several sources one after the other.
#[derive(Default)]
pub struct AggregateWords {
    sources: VecDeque<Box<dyn WordSource + Send>>,
}

impl AggregateWords {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source to be read after the ones already added.
    pub fn push(&mut self, source: impl WordSource + Send + 'static) {
        self.sources.push_back(Box::new(source));
    }
}

impl WordSource for AggregateWords {
    fn next_line(&mut self) -> Option<String> {
        while let Some(source) = self.sources.front_mut() {
            if let Some(line) = source.next_line() {
                return Some(line);
            }
            self.sources.pop_front();
        }

        None
    }
}

/// Whether `c` is a letter of the Latin script.
fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{C0}'..='\u{24F}').contains(&c) && c != '×' && c != '÷')
}

/// Splits `line` into uppercase words. Anything that isn't a Latin letter separates words.
pub fn parse_words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !is_latin_letter(c))
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
}

/// The ordered, deduplicated set of every word supplied so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: BTreeSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `source` until it's exhausted, returning how many new words were added.
    pub fn extend_from<S: WordSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let before = self.words.len();

        while let Some(line) = source.next_line() {
            self.words.extend(parse_words(&line));
        }

        log::debug!("dictionary grew from {before} to {} words", self.words.len());
        self.words.len() - before
    }

    /// Drops every word.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// The words, in order.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words were supplied.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words that fit along at least one side of a `lines × cols` grid and have at least
    /// `min_len` letters.
    pub fn usable(&self, lines: usize, cols: usize, min_len: usize) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| {
                let len = word.chars().count();
                len >= min_len && (len <= lines || len <= cols)
            })
            .cloned()
            .collect()
    }
}
