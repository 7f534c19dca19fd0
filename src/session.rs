//! The game session state machine.

use std::collections::{BTreeMap, BTreeSet};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    build_puzzle, match_line, validate_dimensions, Cell, Dictionary, EmptyView, Error,
    GameOptions, GameResults, Grid, Message, Orientation, Position, Puzzle, Result, ResultsSink,
    View, WordSource, WordSpan,
};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// No game was ever started.
    NotStarted,

    /// A game (or a replay) is running.
    InGame,

    /// The last game ended.
    Ended,
}

/// What a click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindOutcome {
    /// The click started a selection and waits for a second one.
    Pending,

    /// The selection spelled a word still to be found. When several words matched at once this
    /// is the first of them, the others are reported to the view.
    Found(String),

    /// The selection spelled no word still to be found.
    NotFound,
}

/// One player's word search: configuration, the current grid and the words found so far.
///
/// Calls must be serialized. While a replay drives the session, player input is refused with
/// [`Error::ReplayInProgress`].
pub struct GameSession {
    options: GameOptions,
    dimensions_defined: bool,
    dictionary: Dictionary,

    state: GameState,
    grid: Option<Grid>,
    placements: BTreeMap<String, WordSpan>,
    to_find: BTreeSet<String>,
    found: BTreeSet<String>,
    boundaries: BTreeMap<String, Vec<Position>>,

    start_selected: Option<Position>,
    clicks: Vec<Position>,
    replaying: bool,
    last_results: Option<GameResults>,

    view: Box<dyn View + Send>,
    sink: Option<Box<dyn ResultsSink + Send>>,
    rng: StdRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with default options and no dimensions, seeded from the OS.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a session whose puzzles are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            options: GameOptions::default(),
            dimensions_defined: false,
            dictionary: Dictionary::new(),
            state: GameState::NotStarted,
            grid: None,
            placements: BTreeMap::new(),
            to_find: BTreeSet::new(),
            found: BTreeSet::new(),
            boundaries: BTreeMap::new(),
            start_selected: None,
            clicks: Vec::new(),
            replaying: false,
            last_results: None,
            view: Box::new(EmptyView),
            sink: None,
            rng,
        }
    }

    /// Sends notifications to `view` from now on.
    pub fn set_view(&mut self, view: impl View + Send + 'static) {
        self.view = Box::new(view);
    }

    /// Saves the results of every non-replay game to `sink`.
    pub fn set_results_sink(&mut self, sink: impl ResultsSink + Send + 'static) {
        self.sink = Some(Box::new(sink));
    }

    fn ensure_not_in_game(&self) -> Result<()> {
        if self.state == GameState::InGame {
            Err(Error::InvalidInGameChange)
        } else {
            Ok(())
        }
    }

    /// Replaces every option, validating the dimensions.
    pub fn set_options(&mut self, options: GameOptions) -> Result<()> {
        self.ensure_not_in_game()?;
        validate_dimensions(options.lines, options.cols)?;

        self.options = options;
        self.dimensions_defined = true;
        Ok(())
    }

    /// Sets the grid size.
    pub fn set_dimensions(&mut self, lines: usize, cols: usize) -> Result<()> {
        self.ensure_not_in_game()?;
        validate_dimensions(lines, cols)?;

        self.options.lines = lines;
        self.options.cols = cols;
        self.dimensions_defined = true;
        Ok(())
    }

    /// Reads every word of `source`, keeping the current words too when `keep_existing` is set.
    /// Returns how many new words were added.
    pub fn set_words<S: WordSource + ?Sized>(
        &mut self,
        source: &mut S,
        keep_existing: bool,
    ) -> Result<usize> {
        self.ensure_not_in_game()?;

        if !keep_existing {
            self.dictionary.clear();
        }
        Ok(self.dictionary.extend_from(source))
    }

    /// Sets the most words a puzzle uses, `0` for no limit.
    pub fn set_max_words(&mut self, max_words: usize) -> Result<()> {
        self.ensure_not_in_game()?;
        self.options.max_words = max_words;
        Ok(())
    }

    /// Sets the shortest word length used.
    pub fn set_min_word_size(&mut self, min_word_size: usize) -> Result<()> {
        self.ensure_not_in_game()?;
        self.options.min_word_size = min_word_size;
        Ok(())
    }

    /// Sets the orientations words may be placed in.
    pub fn set_orientations(&mut self, orientations: BTreeSet<Orientation>) -> Result<()> {
        self.ensure_not_in_game()?;
        self.options.orientations = orientations;
        Ok(())
    }

    /// Sets how many wildcards each puzzle gets.
    pub fn set_wildcards(&mut self, wildcards: usize) -> Result<()> {
        self.ensure_not_in_game()?;
        self.options.wildcards = wildcards;
        Ok(())
    }

    /// The current options.
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Every word supplied so far.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether a game is running.
    pub fn is_in_game(&self) -> bool {
        self.state == GameState::InGame
    }

    /// Whether a replay is driving the session.
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// The grid of the current or last game.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// The cell at `pos` in the current grid.
    pub fn cell_at(&self, pos: Position) -> Option<&Cell> {
        self.grid.as_ref()?.get(pos)
    }

    /// Where each word of the current game was placed.
    pub fn word_spans(&self) -> &BTreeMap<String, WordSpan> {
        &self.placements
    }

    /// Words not found yet.
    pub fn words_to_find(&self) -> &BTreeSet<String> {
        &self.to_find
    }

    /// Words found so far.
    pub fn words_found(&self) -> &BTreeSet<String> {
        &self.found
    }

    /// The first click of a selection in progress.
    pub fn start_selected(&self) -> Option<Position> {
        self.start_selected
    }

    /// Every player click of the current game, in order.
    pub fn click_log(&self) -> &[Position] {
        &self.clicks
    }

    /// The results of the last game that ended.
    pub fn last_results(&self) -> Option<&GameResults> {
        self.last_results.as_ref()
    }

    /// A snapshot of the current game's words.
    pub fn current_results(&self) -> GameResults {
        GameResults {
            all_words: self.to_find.union(&self.found).cloned().collect(),
            found_words: self.found.clone(),
            is_replay: self.replaying,
        }
    }

    /// Generates a new puzzle and starts playing it.
    pub fn start_game(&mut self) -> Result<()> {
        self.ensure_not_in_game()?;
        if !self.dimensions_defined {
            return Err(Error::NoDimensionsDefined);
        }

        let puzzle = build_puzzle(&self.dictionary, &self.options, &mut self.rng)?;
        self.begin(puzzle);
        Ok(())
    }

    /// Like [`GameSession::start_game`], but retries up to `attempts` times while no word could
    /// be placed.
    pub fn start_game_retrying(&mut self, attempts: usize) -> Result<()> {
        let mut tries = 1;

        loop {
            match self.start_game() {
                Err(Error::CouldNotPopulateMatrix { .. }) if tries < attempts => {
                    log::warn!("could not populate the grid, retrying ({tries}/{attempts})");
                    tries += 1;
                }
                result => return result,
            }
        }
    }

    fn begin(&mut self, puzzle: Puzzle) {
        self.to_find = puzzle.words();
        self.boundaries = puzzle
            .placements
            .iter()
            .map(|(word, span)| {
                let mut ends = vec![span.first(), span.last()];
                ends.dedup();
                (word.clone(), ends)
            })
            .collect();
        self.placements = puzzle.placements;
        self.grid = Some(puzzle.grid);

        self.found.clear();
        self.clicks.clear();
        self.start_selected = None;
        self.replaying = false;
        self.state = GameState::InGame;

        if let Some(grid) = &self.grid {
            log::info!("game started with {} words", self.to_find.len());
            log::debug!("grid:\n{grid}");
        }
        self.view.game_started();
    }

    /// Handles a player click at `pos`.
    ///
    /// The first click of a pair is remembered and [`FindOutcome::Pending`] is returned. The
    /// second click checks the line between both against the words still to be found. The game
    /// ends once every word was found.
    pub fn find_word(&mut self, pos: Position) -> Result<FindOutcome> {
        if self.replaying {
            return Err(Error::ReplayInProgress);
        }

        self.select(pos)
    }

    /// Feeds a recorded click back while replaying.
    pub(crate) fn replay_click(&mut self, pos: Position) -> Result<FindOutcome> {
        self.view.click(pos);
        self.select(pos)
    }

    fn select(&mut self, pos: Position) -> Result<FindOutcome> {
        if self.state != GameState::InGame {
            return Err(Error::NotInGame);
        }

        if let Some(cell) = self.cell_at(pos) {
            let message = Message::Click {
                pos,
                glyph: cell.display(),
            };
            self.view.update(&message);
        }
        if !self.replaying {
            self.clicks.push(pos);
        }

        let start = match self.start_selected.take() {
            Some(start) => start,
            None => {
                self.start_selected = Some(pos);
                return Ok(FindOutcome::Pending);
            }
        };

        let matches = match &self.grid {
            Some(grid) => match_line(grid, start, pos, &mut self.to_find),
            None => Vec::new(),
        };

        let outcome = match matches.first() {
            Some(first) => FindOutcome::Found(first.word.clone()),
            None => FindOutcome::NotFound,
        };

        for found in matches {
            log::info!("found {} for {} points", found.word, found.points);

            self.boundaries.remove(&found.word);
            self.view.word_found(start, pos);
            self.view.update(&Message::WordFound {
                start,
                end: pos,
                word: found.word.clone(),
            });
            self.view.update(&Message::WordPoints {
                word: found.word.clone(),
                points: found.points,
            });
            self.found.insert(found.word);
        }

        if self.to_find.is_empty() {
            self.end_game()?;
        }

        Ok(outcome)
    }

    /// Whether every word of the running game was found.
    pub fn all_words_were_found(&self) -> Result<bool> {
        if self.state != GameState::InGame {
            return Err(Error::NotInGame);
        }

        Ok(self.to_find.is_empty())
    }

    /// Ends the running game and reports its results.
    ///
    /// Results of a normal game are saved to the results sink, a failure to do so is only
    /// logged. Replay results are never saved.
    pub fn end_game(&mut self) -> Result<GameResults> {
        if self.state != GameState::InGame {
            return Err(Error::NotInGame);
        }

        self.state = GameState::Ended;
        self.start_selected = None;

        let results = self.current_results();
        log::info!(
            "game ended, {} of {} words found{}",
            results.found_words.len(),
            results.all_words.len(),
            if results.is_replay { " (replay)" } else { "" }
        );

        self.view.game_ended(&results);
        if !results.is_replay {
            if let Some(sink) = self.sink.as_mut() {
                if let Err(err) = sink.save(&results) {
                    log::warn!("could not save the results: {err}");
                }
            }
        }

        self.last_results = Some(results.clone());
        Ok(results)
    }

    /// Restarts the last game from scratch in replay mode and returns the clicks to replay.
    ///
    /// Every word goes back to the to-find set. The session refuses player input until the
    /// replay is finished, see [`crate::replay::spawn`].
    pub fn replay(&mut self) -> Result<Vec<Position>> {
        match self.state {
            GameState::InGame => return Err(Error::InvalidInGameChange),
            GameState::NotStarted => return Err(Error::NotInGame),
            GameState::Ended => {}
        }

        let found = std::mem::take(&mut self.found);
        self.to_find.extend(found);
        self.start_selected = None;
        self.replaying = true;
        self.state = GameState::InGame;

        log::info!("replaying {} clicks", self.clicks.len());
        self.view.game_started();

        Ok(self.clicks.clone())
    }

    /// Stops replaying, ending the replayed game if it's still running.
    pub(crate) fn finish_replay(&mut self) {
        if self.state == GameState::InGame {
            // Only fails outside a game.
            let _ = self.end_game();
        }
        self.replaying = false;
    }

    /// Reveals one end of a word still to be found, or `None` when no hint is left.
    pub fn give_hint(&mut self) -> Result<Option<Position>> {
        if self.replaying {
            return Err(Error::ReplayInProgress);
        }
        if self.state != GameState::InGame {
            return Err(Error::NotInGame);
        }

        let hint = self
            .to_find
            .iter()
            .find_map(|word| self.boundaries.get_mut(word)?.pop());

        if let Some(pos) = hint {
            self.view.update(&Message::Hint { pos });
        }

        Ok(hint)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{Direction, ManualWords, MAX_SIDE_LEN, MIN_SIDE_LEN};

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Recorder {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl View for Recorder {
        fn game_started(&mut self) {
            self.events.lock().unwrap().push("started".to_string());
        }

        fn word_found(&mut self, start: Position, end: Position) {
            self.events
                .lock()
                .unwrap()
                .push(format!("found {start} / {end}"));
        }

        fn game_ended(&mut self, results: &GameResults) {
            self.events
                .lock()
                .unwrap()
                .push(format!("ended {:.0}", results.percent_found()));
        }

        fn update(&mut self, message: &Message) {
            self.events.lock().unwrap().push(message.to_string());
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        saved: Arc<Mutex<Vec<GameResults>>>,
    }

    impl ResultsSink for MemorySink {
        fn save(&mut self, results: &GameResults) -> Result<()> {
            self.saved.lock().unwrap().push(results.clone());
            Ok(())
        }
    }

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    /// A 5x5 grid of 'X' with the given words written in.
    fn puzzle(words: &[(&str, WordSpan)]) -> Puzzle {
        let mut grid = Grid::new(5, 5);
        let mut placements = BTreeMap::new();

        for &(word, span) in words {
            for (ch, pos) in word.chars().zip(span.indices()) {
                match grid.get(pos).cloned() {
                    Some(mut cell) => {
                        cell.try_add_actual(ch);
                        grid.set(pos, cell);
                    }
                    None => grid.set(pos, Cell::new(ch)),
                }
            }
            placements.insert(word.to_string(), span);
        }
        for pos in grid.positions().collect::<Vec<_>>() {
            if grid.get(pos).is_none() {
                grid.set(pos, Cell::new('X'));
            }
        }

        Puzzle { grid, placements }
    }

    fn playing(words: &[(&str, WordSpan)]) -> GameSession {
        let mut session = GameSession::seeded(1);
        session.begin(puzzle(words));
        session
    }

    fn span(line: usize, col: usize, len: usize, direction: Direction) -> WordSpan {
        WordSpan::new(p(line, col), len, direction)
    }

    #[test]
    fn dimensions_are_validated() {
        let mut session = GameSession::new();

        assert!(session.set_dimensions(MAX_SIDE_LEN, MIN_SIDE_LEN).is_ok());
        assert_eq!((session.options().lines, session.options().cols), (MAX_SIDE_LEN, MIN_SIDE_LEN));
        assert!(matches!(
            session.set_dimensions(MIN_SIDE_LEN - 1, MAX_SIDE_LEN + 1),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(session.set_dimensions(0, 5), Err(Error::InvalidDimensions { .. })));
        // Rejected sizes leave the previous ones alone.
        assert_eq!(session.options().lines, MAX_SIDE_LEN);
    }

    #[test]
    fn start_without_dimensions() {
        let mut session = GameSession::new();
        session.set_words(&mut ManualWords::from_iter(["word"]), true).unwrap();

        assert!(matches!(session.start_game(), Err(Error::NoDimensionsDefined)));
    }

    #[test]
    fn start_without_words() {
        let mut session = GameSession::new();
        session.set_dimensions(MAX_SIDE_LEN, MAX_SIDE_LEN).unwrap();

        assert!(matches!(session.start_game(), Err(Error::NoWords)));
        assert_eq!(session.state(), GameState::NotStarted);
    }

    #[test]
    fn configuration_is_frozen_in_game() {
        let mut session = GameSession::seeded(2);
        session.set_dimensions(8, 8).unwrap();
        session.set_words(&mut ManualWords::from_iter(["Some", "words"]), true).unwrap();
        session.start_game().unwrap();

        assert!(matches!(session.set_dimensions(5, 5), Err(Error::InvalidInGameChange)));
        assert!(matches!(session.set_max_words(1), Err(Error::InvalidInGameChange)));
        assert!(matches!(session.set_wildcards(0), Err(Error::InvalidInGameChange)));
        assert!(matches!(
            session.set_words(&mut ManualWords::new(), false),
            Err(Error::InvalidInGameChange)
        ));
        assert!(matches!(session.start_game(), Err(Error::InvalidInGameChange)));
    }

    #[test]
    fn set_words_can_replace() {
        let mut session = GameSession::new();
        session.set_words(&mut ManualWords::from_iter(["test", "words"]), true).unwrap();
        session.set_words(&mut ManualWords::from_iter(["different", "ones"]), true).unwrap();
        assert_eq!(session.dictionary().len(), 4);

        session.set_words(&mut ManualWords::from_iter(["different", "ones"]), false).unwrap();
        assert_eq!(session.dictionary().len(), 2);
    }

    #[test]
    fn queries_need_a_game() {
        let mut session = GameSession::new();

        assert!(matches!(session.find_word(p(0, 0)), Err(Error::NotInGame)));
        assert!(matches!(session.all_words_were_found(), Err(Error::NotInGame)));
        assert!(matches!(session.give_hint(), Err(Error::NotInGame)));
        assert!(matches!(session.end_game(), Err(Error::NotInGame)));
        assert!(matches!(session.replay(), Err(Error::NotInGame)));
    }

    #[test]
    fn first_click_is_pending() {
        let mut session = playing(&[("CAT", span(0, 0, 3, Direction::Right))]);

        assert_eq!(session.find_word(p(4, 4)).unwrap(), FindOutcome::Pending);
        assert_eq!(session.start_selected(), Some(p(4, 4)));
    }

    #[test]
    fn invalid_line_resets_selection() {
        let mut session = playing(&[("CAT", span(0, 0, 3, Direction::Right))]);

        session.find_word(p(0, 0)).unwrap();
        assert_eq!(session.find_word(p(1, 2)).unwrap(), FindOutcome::NotFound);
        assert_eq!(session.start_selected(), None);
        assert_eq!(session.click_log(), [p(0, 0), p(1, 2)]);
    }

    #[test]
    fn click_far_outside_the_grid_matches_nothing() {
        let mut session = playing(&[("CAT", span(0, 0, 3, Direction::Right))]);

        session.find_word(p(0, 0)).unwrap();
        assert_eq!(session.find_word(p(0, usize::MAX / 4)).unwrap(), FindOutcome::NotFound);
        assert_eq!(session.start_selected(), None);
        assert!(session.is_in_game());
        assert!(session.words_to_find().contains("CAT"));
    }

    #[test]
    fn reversed_selection_finds_the_word() {
        let mut session = playing(&[
            ("CAT", span(0, 0, 3, Direction::Right)),
            ("DOG", span(2, 0, 3, Direction::Down)),
        ]);

        session.find_word(p(0, 2)).unwrap();
        assert_eq!(session.find_word(p(0, 0)).unwrap(), FindOutcome::Found("CAT".into()));
        assert_eq!(session.words_found(), &BTreeSet::from(["CAT".to_string()]));
        assert_eq!(session.words_to_find(), &BTreeSet::from(["DOG".to_string()]));
        assert!(!session.all_words_were_found().unwrap());

        // Found words can't be found twice.
        session.find_word(p(0, 0)).unwrap();
        assert_eq!(session.find_word(p(0, 2)).unwrap(), FindOutcome::NotFound);
    }

    #[test]
    fn overlapping_words_are_both_found() {
        // Both words share every cell, one with an accent on the second letter.
        let mut session = playing(&[
            ("CASA", span(1, 0, 4, Direction::Right)),
            ("CÁSA", span(1, 0, 4, Direction::Right)),
            ("OWL", span(4, 0, 3, Direction::Right)),
        ]);
        let recorder = Recorder::default();
        session.set_view(recorder.clone());

        session.find_word(p(1, 0)).unwrap();
        assert_eq!(session.find_word(p(1, 3)).unwrap(), FindOutcome::Found("CASA".into()));

        assert_eq!(session.words_to_find(), &BTreeSet::from(["OWL".to_string()]));
        let events = recorder.events();
        assert!(events.contains(&"\"CASA\" = 4 points.".to_string()));
        assert!(events.contains(&"\"CÁSA\" = 4 points.".to_string()));
    }

    #[test]
    fn finding_the_last_word_ends_the_game() {
        let mut session = playing(&[("OWL", span(0, 4, 3, Direction::DiagonalDownLeft))]);
        let sink = MemorySink::default();
        let recorder = Recorder::default();
        session.set_results_sink(sink.clone());
        session.set_view(recorder.clone());

        session.find_word(p(2, 2)).unwrap();
        assert_eq!(session.find_word(p(0, 4)).unwrap(), FindOutcome::Found("OWL".into()));

        assert_eq!(session.state(), GameState::Ended);
        let saved = sink.saved.lock().unwrap().clone();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].percent_found(), 100.0);
        assert!(!saved[0].is_replay);
        assert_eq!(recorder.events().last().unwrap(), "ended 100");
    }

    #[test]
    fn partition_holds_while_playing() {
        let mut session = playing(&[
            ("CAT", span(0, 0, 3, Direction::Right)),
            ("DOG", span(2, 0, 3, Direction::Down)),
            ("OWL", span(4, 4, 3, Direction::Left)),
        ]);
        let total = session.current_results().all_words.len();

        for pos in [p(0, 0), p(0, 2), p(3, 3), p(4, 2), p(4, 4), p(4, 2), p(2, 0), p(4, 0)] {
            session.find_word(pos).unwrap();
            assert!(session.words_to_find().is_disjoint(session.words_found()));
            assert_eq!(session.current_results().all_words.len(), total);
        }
        assert_eq!(session.words_found().len(), 3);
    }

    #[test]
    fn hints_pop_word_ends() {
        let mut session = playing(&[("CAT", span(0, 0, 3, Direction::Right))]);
        let recorder = Recorder::default();
        session.set_view(recorder.clone());

        let first = session.give_hint().unwrap();
        let second = session.give_hint().unwrap();

        assert_eq!(
            BTreeSet::from([first.unwrap(), second.unwrap()]),
            BTreeSet::from([p(0, 0), p(0, 2)])
        );
        assert_eq!(session.give_hint().unwrap(), None);
        assert_eq!(session.words_to_find().len(), 1);
        assert!(recorder
            .events()
            .contains(&"hint: a word starts or ends at (0, A)".to_string()));
    }

    #[test]
    fn replay_resets_words_and_refuses_player_input() {
        let mut session = playing(&[
            ("CAT", span(0, 0, 3, Direction::Right)),
            ("DOG", span(2, 0, 3, Direction::Down)),
        ]);
        let sink = MemorySink::default();
        session.set_results_sink(sink.clone());

        session.find_word(p(0, 0)).unwrap();
        session.find_word(p(0, 2)).unwrap();
        session.end_game().unwrap();
        assert_eq!(sink.saved.lock().unwrap().len(), 1);

        let clicks = session.replay().unwrap();
        assert_eq!(clicks, [p(0, 0), p(0, 2)]);
        assert_eq!(session.words_to_find().len(), 2);
        assert!(session.words_found().is_empty());
        assert!(matches!(session.find_word(p(0, 0)), Err(Error::ReplayInProgress)));
        assert!(matches!(session.give_hint(), Err(Error::ReplayInProgress)));

        for pos in clicks {
            session.replay_click(pos).unwrap();
        }
        session.finish_replay();

        assert!(!session.is_replaying());
        assert_eq!(session.state(), GameState::Ended);
        let results = session.last_results().unwrap();
        assert!(results.is_replay);
        assert_eq!(results.found_words, BTreeSet::from(["CAT".to_string()]));
        // Replays are never saved.
        assert_eq!(sink.saved.lock().unwrap().len(), 1);
        // Nor do they grow the click log.
        assert_eq!(session.click_log().len(), 2);
    }

    #[test]
    fn replay_only_after_a_game() {
        let mut session = playing(&[("CAT", span(0, 0, 3, Direction::Right))]);

        assert!(matches!(session.replay(), Err(Error::InvalidInGameChange)));
    }

    #[test]
    fn retries_puzzle_generation() {
        let mut session = GameSession::seeded(3);
        session.set_dimensions(5, 5).unwrap();
        session
            .set_words(&mut ManualWords::from_iter(["THISISNINELETTERS"]), true)
            .unwrap();

        assert!(matches!(
            session.start_game_retrying(3),
            Err(Error::CouldNotPopulateMatrix { .. })
        ));
        assert_eq!(session.state(), GameState::NotStarted);
    }
}
