use std::time::Instant;

use clap::{Args, Parser, Subcommand};
#[cfg(feature = "stats")]
use knightnet::search::stats::{human_readable_time, StatsConfig};
use knightnet::{
    board::BoardSize,
    search::{SearchConfig, SearchOutcome, TourError},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
struct BoardArgs {
    /// Number of columns
    #[arg(long, default_value_t = 6)]
    width: u16,
    /// Number of rows
    #[arg(long, default_value_t = 6)]
    height: u16,
    /// Seed for the initial activations
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of worker threads
    #[arg(short, long, default_value_t = 1)]
    workers: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Searches for a single closed tour (DEFAULT)
    Solve {
        #[command(flatten)]
        board: BoardArgs,
        /// Gives up after this many trials
        #[arg(short = 't', long)]
        max_trials: Option<u64>,
        /// Relaxation updates allowed per trial
        #[arg(short, long, default_value_t = 40)]
        iterations: u8,
    },
    /// Runs several searches and reports how many trials they needed
    Stats {
        /// Number of searches to run
        runs: u32,
        #[command(flatten)]
        board: BoardArgs,
        /// Gives up each search after this many trials
        #[arg(short = 't', long)]
        max_trials: Option<u64>,
        /// Show timing information
        #[arg(long)]
        bench: bool,
        /// Prints the result of every run
        #[arg(short, long)]
        verbose: bool,
    },
}

fn search_config(board: &BoardArgs, max_trials: Option<u64>) -> SearchConfig {
    let mut config = SearchConfig::new().with_workers(board.workers);
    if let Some(seed) = board.seed {
        config = config.with_seed(seed)
    }
    if let Some(trials) = max_trials {
        config = config.with_max_trials(trials)
    }
    config
}

fn board_size(board: &BoardArgs) -> Result<BoardSize, TourError> {
    BoardSize::new(board.width, board.height).ok_or(TourError::ZeroDimension {
        width: board.width,
        height: board.height,
    })
}

fn solve(board: BoardArgs, max_trials: Option<u64>, iterations: u8) -> Result<(), TourError> {
    let size = board_size(&board)?;
    let start = Instant::now();
    let outcome = search_config(&board, max_trials)
        .with_max_iterations(iterations)
        .run(size)?;
    let elapsed = start.elapsed();

    match outcome {
        SearchOutcome::Found { tour, trials } => {
            print!("{tour}");
            println!("The success rate is 1/{trials} ({:.5})", 1. / trials as f64);
        }
        SearchOutcome::Exhausted { trials } => return Err(TourError::Exhausted(trials)),
    }
    println!("The running time is {:.3}s", elapsed.as_secs_f64());
    Ok(())
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    // 5x5 has an odd number of squares and so no closed tour; default to 6x6.
    let result = match args.command.unwrap_or(Command::Solve {
        board: BoardArgs {
            width: 6,
            height: 6,
            seed: None,
            workers: 1,
        },
        max_trials: None,
        iterations: 40,
    }) {
        Command::Solve {
            board,
            max_trials,
            iterations,
        } => solve(board, max_trials, iterations),
        #[cfg(feature = "stats")]
        Command::Stats {
            runs,
            board,
            max_trials,
            bench,
            verbose,
        } => board_size(&board).and_then(|size| {
            let mut config = StatsConfig::new(runs, search_config(&board, max_trials))
                .benchmark(bench)
                .verbose(verbose);
            if let Some(seed) = board.seed {
                config = config.with_seed(seed)
            }
            let statistics = config.go(size)?;
            if bench {
                println!(
                    "mean time per run {}",
                    human_readable_time(statistics.elapsed.as_secs_f64() / runs.max(1) as f64)
                );
            }
            Ok(())
        }),
        #[cfg(not(feature = "stats"))]
        Command::Stats { .. } => {
            eprintln!("Knightnet has not been compiled with feature `stats`");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        if let Some(note) = infeasibility_note(&e) {
            eprintln!("{note}")
        }
        std::process::exit(1)
    }
}

/// Explains why a board was rejected before any trial ran.
fn infeasibility_note(error: &TourError) -> Option<String> {
    match error {
        TourError::NoClosedTour(size) if size.square_count() % 2 == 1 => Some(format!(
            "note: knight moves always change square colour, so a closed tour needs an even \
             number of squares and {size} has {}; try the default 6x6 board",
            size.square_count()
        )),
        TourError::NoClosedTour(_) => Some(
            "note: by Schwenk's theorem no closed tour exists when the short side is 1, 2 or 4, \
             or 3 with a long side of 4, 6 or 8; try the default 6x6 board"
                .to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_boards_explain_parity() {
        let size = BoardSize::new(5, 5).unwrap();
        let note = infeasibility_note(&TourError::NoClosedTour(size)).unwrap();
        assert!(note.contains("5x5 has 25"));
    }

    #[test]
    fn narrow_boards_explain_schwenk() {
        let size = BoardSize::new(4, 8).unwrap();
        let note = infeasibility_note(&TourError::NoClosedTour(size)).unwrap();
        assert!(note.contains("Schwenk"));
    }

    #[test]
    fn other_errors_have_no_note() {
        assert_eq!(infeasibility_note(&TourError::Exhausted(3)), None);
        let size = BoardSize::new(1, 1).unwrap();
        assert_eq!(infeasibility_note(&TourError::DegenerateBoard(size)), None);
    }
}
