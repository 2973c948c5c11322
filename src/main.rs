//! Kinrow-Rust: k-in-a-row with alpha-beta search.
//!
//! ## Usage
//!
//! - `kinrow-rust` - Pick a game mode and play in the terminal
//! - `kinrow-rust play` - Same as above
//! - `kinrow-rust trials` - Tally search-vs-random games and append to the log
//! - `kinrow-rust summary` - Print the runs recorded in the log

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use kinrow_rust::arena::{play_game, run_both_orders};
use kinrow_rust::constants::{
    DEFAULT_GAMES, DEFAULT_HEIGHT, DEFAULT_K, DEFAULT_LOG_FILE, DEFAULT_REPLICAS, DEFAULT_SEED,
    DEFAULT_WIDTH,
};
use kinrow_rust::game::Game;
use kinrow_rust::kinrow::KInARow;
use kinrow_rust::manual::{GameMode, ManualPlayer, select_mode};
use kinrow_rust::minimax::AlphaBetaPlayer;
use kinrow_rust::player::Player;
use kinrow_rust::random::RandomPlayer;
use kinrow_rust::record::{append_run, parse_log};

/// Kinrow-Rust: k-in-a-row with exhaustive alpha-beta search
#[derive(Parser)]
#[command(name = "kinrow-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board rows
    #[arg(long, global = true, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Board columns
    #[arg(long, global = true, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Marks in a row needed to win
    #[arg(short, global = true, default_value_t = DEFAULT_K)]
    k: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a game mode and play in the terminal
    Play {
        /// Seed for the random player (entropy if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play search-vs-random games in both orders and append the tallies to the log
    Trials {
        /// Games per ordering
        #[arg(short, long, default_value_t = DEFAULT_GAMES)]
        games: usize,

        /// Base seed for the random players
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Worker threads
        #[arg(short, long, default_value_t = DEFAULT_REPLICAS)]
        replicas: usize,

        /// Run log to append to
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,
    },
    /// Print the runs recorded in the log
    Summary {
        /// Run log to read
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log: PathBuf,
    },
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let game = KInARow::new(cli.height, cli.width, cli.k)?;
    info!(h = game.h, v = game.v, k = game.k, "board configured");

    match cli.command {
        Some(Commands::Play { seed }) => run_play(&game, seed),
        None => run_play(&game, None),
        Some(Commands::Trials {
            games,
            seed,
            replicas,
            log,
        }) => run_trials(&game, games, seed, replicas, &log),
        Some(Commands::Summary { log }) => run_summary(&log),
    }
}

fn human() -> Box<dyn Player<KInARow>> {
    Box::new(ManualPlayer::new(io::stdin(), io::stdout()))
}

fn search() -> Box<dyn Player<KInARow>> {
    Box::new(AlphaBetaPlayer)
}

fn random(seed: Option<u64>) -> Box<dyn Player<KInARow>> {
    Box::new(seed.map_or_else(RandomPlayer::new, RandomPlayer::with_seed))
}

fn run_play(game: &KInARow, seed: Option<u64>) -> Result<()> {
    let mode = select_mode(&mut io::stdin(), &mut io::stdout())?;
    info!(?mode, "mode selected");

    let (mut first, mut second) = match mode {
        GameMode::HumanVsHuman => (human(), human()),
        GameMode::HumanVsMinimax => (human(), search()),
        GameMode::HumanVsRandom => (human(), random(seed)),
        GameMode::MinimaxVsRandom => (search(), random(seed)),
        GameMode::RandomVsMinimax => (random(seed), search()),
    };

    let finished = play_game(game, first.as_mut(), second.as_mut())?;
    print!("{}", game.display(&finished.state));
    println!("{}", finished.outcome);
    Ok(())
}

fn run_trials(
    game: &KInARow,
    games: usize,
    seed: u64,
    replicas: usize,
    log: &Path,
) -> Result<()> {
    let (random_first, minimax_first) = run_both_orders(game, games, seed, replicas)
        .context("Trial run failed")?;

    println!("Results with randomized player playing first after {games} games:");
    println!("{random_first}");
    println!("Results with minimax player playing first after {games} games:");
    println!("{minimax_first}");

    let run = append_run(log, &random_first, &minimax_first)?;
    info!(run, log = %log.display(), "run recorded");
    Ok(())
}

fn run_summary(log: &Path) -> Result<()> {
    let records = parse_log(log)?;
    if records.is_empty() {
        println!("No runs recorded in {}", log.display());
        return Ok(());
    }

    println!("{:>5}  {:<14} {:>5} {:>5} {:>5}", "run", "order", "X", "O", "Tie");
    for record in &records {
        for (label, tally) in &record.tallies {
            println!(
                "{:>5}  {:<14} {:>5} {:>5} {:>5}",
                record.run, label, tally.x, tally.o, tally.tie
            );
        }
    }
    Ok(())
}
