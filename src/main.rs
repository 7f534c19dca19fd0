use std::{
    io::Write,
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
    time::Duration,
};

use clap::{Parser, ValueEnum};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::Mutex,
};
use word_search::{
    replay, FileWords, FindOutcome, GameOptions, GameResults, GameSession, Grid, ManualWords,
    Message, Orientation, Position, ScoreFile, View,
};

/// How many times a puzzle is regenerated when no word could be placed.
const BUILD_ATTEMPTS: usize = 3;

const DEFAULT_WORDS: [&str; 9] = [
    "nap",
    "sleep",
    "pillow",
    "eggplant",
    "distraction",
    "sandwich",
    "anklet",
    "rats",
    "skater",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
    Diagonal,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Horizontal => Orientation::Horizontal,
            OrientationArg::Vertical => Orientation::Vertical,
            OrientationArg::Diagonal => Orientation::Diagonal,
        }
    }
}

/// Play a word search in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list file; anything that isn't a letter separates words [default: a built-in list]
    #[arg(short, long)]
    words: Option<PathBuf>,

    /// Number of lines of the grid
    #[arg(long, default_value_t = 8)]
    lines: usize,

    /// Number of columns of the grid
    #[arg(long, default_value_t = 8)]
    cols: usize,

    /// Most words hidden in one puzzle, 0 for no limit
    #[arg(short = 'n', long, default_value_t = 5)]
    max_words: usize,

    /// Shortest word length used
    #[arg(short, long, default_value_t = 1)]
    min_word_size: usize,

    /// Allowed orientation, repeat for more [default: horizontal and vertical]
    #[arg(short, long = "orientation", value_enum)]
    orientations: Vec<OrientationArg>,

    /// Number of wildcard cells
    #[arg(long, default_value_t = 1)]
    wildcards: usize,

    /// Append the score of each game to this file
    #[arg(long)]
    scores: Option<PathBuf>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Replay the game's clicks once it ends
    #[arg(long, default_value_t = false)]
    replay: bool,

    /// Pause between replayed clicks, in milliseconds
    #[arg(long, default_value_t = 1_000)]
    replay_interval_ms: u64,

    /// Print debug logs
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Prints the game's log lines and results to stdout.
struct TerminalView;

impl View for TerminalView {
    fn game_started(&mut self) {
        println!("game started");
    }

    fn game_ended(&mut self, results: &GameResults) {
        let title = if results.is_replay { "replay ended" } else { "game ended" };
        println!("{title}\n{}", results.summary());
    }

    fn update(&mut self, message: &Message) {
        println!("{message}");
    }

    fn click(&mut self, pos: Position) {
        println!("replayed click at {pos}");
    }
}

fn print_grid(grid: &Grid) {
    let header: String = (0..grid.cols()).map(|col| format!("  {col:<2}")).collect();
    println!("{header}");

    for (i, line) in grid.to_string().lines().enumerate() {
        if i % 2 == 1 {
            println!("{line} {}", i / 2);
        } else {
            println!("{line}");
        }
    }
}

/// Reads `line col` (or `line, col`), keeping only positions inside `grid`.
fn parse_position(input: &str, grid: &Grid) -> Option<Position> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let line = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let pos = Position::new(line, col);

    (parts.next().is_none() && grid.contains(pos)).then_some(pos)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let debug_enabled = args.debug || std::env::var("WORD_SEARCH_DEBUG").is_ok();
    word_search::log::init_logger(debug_enabled);

    if let Err(e) = try_main(args).await {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn try_main(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = match args.seed {
        Some(seed) => GameSession::seeded(seed),
        None => GameSession::new(),
    };

    let mut options = GameOptions {
        lines: args.lines,
        cols: args.cols,
        max_words: args.max_words,
        min_word_size: args.min_word_size,
        wildcards: args.wildcards,
        ..GameOptions::default()
    };
    if !args.orientations.is_empty() {
        options.orientations = args.orientations.iter().map(|&o| o.into()).collect();
    }
    session.set_options(options)?;

    let added = match &args.words {
        Some(path) => session.set_words(&mut FileWords::open(path)?, true)?,
        None => session.set_words(&mut ManualWords::from_iter(DEFAULT_WORDS), true)?,
    };
    log::info!("loaded {added} words");

    session.set_view(TerminalView);
    if let Some(path) = &args.scores {
        session.set_results_sink(ScoreFile::new(path));
    }

    if let Err(e) = session.start_game_retrying(BUILD_ATTEMPTS) {
        eprintln!("try a bigger grid or other words");
        return Err(e.into());
    }

    if let Some(grid) = session.grid() {
        print_grid(grid);
    }
    println!(
        "{} words to find. Enter `line col` twice to select, `hint` or `quit`.",
        session.words_to_find().len()
    );

    let mut input = BufReader::new(tokio::io::stdin()).lines();

    while session.is_in_game() {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = input.next_line().await? else {
            session.end_game()?;
            break;
        };

        match line.trim() {
            "" => {}
            "quit" => {
                session.end_game()?;
            }
            "hint" => {
                if session.give_hint()?.is_none() {
                    println!("no hints left");
                }
            }
            other => match session.grid().and_then(|grid| parse_position(other, grid)) {
                Some(pos) => {
                    if session.find_word(pos)? == FindOutcome::NotFound {
                        println!("nothing there");
                    }
                }
                None => println!("expected `line col` inside the grid, `hint` or `quit`"),
            },
        }
    }

    if args.replay {
        let session = Arc::new(Mutex::new(session));
        let interval = Duration::from_millis(args.replay_interval_ms);

        replay::spawn(session, interval).await?.join().await;
    }

    Ok(())
}
