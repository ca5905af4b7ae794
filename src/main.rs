//! Five-row: a five-in-a-row engine with a pattern-matching opponent.
//!
//! ## Usage
//!
//! - `five-row` - Show a demo
//! - `five-row protocol` - Start the text protocol server for UI integration
//! - `five-row demo` - Play the engine against a random opponent
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use five_row::engine::Difficulty;
use five_row::game::{Game, TurnOutcome};
use five_row::playout::{RandomPlayer, playout};
use five_row::protocol::ProtocolEngine;

/// Five-row: a five-in-a-row engine with a pattern-matching opponent
#[derive(Parser)]
#[command(name = "five-row")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Difficulty level: easy, medium or hard
    #[arg(short, long, global = true, default_value_t = Difficulty::Hard)]
    level: Difficulty,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with a UI front end
    Protocol,
    /// Play the engine against a seeded random opponent
    Demo {
        /// Seed for the random opponent
        #[arg(short, long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Protocol) => {
            info!(level = %cli.level, "starting protocol server");
            let mut engine = ProtocolEngine::with_difficulty(cli.level);
            engine.run()?;
        }
        Some(Commands::Demo { seed }) => run_demo(cli.level, seed),
        None => run_demo(cli.level, 1),
    }
    Ok(())
}

fn run_demo(level: Difficulty, seed: u64) {
    println!("Five-row: random opponent vs. {level} engine (seed {seed})\n");

    let mut game = Game::new(level);
    let result = playout(&mut game, &mut RandomPlayer::with_seed(seed));

    println!("{}", game.board());
    println!("Human moves: {}", result.turns);
    match result.outcome {
        TurnOutcome::ComputerWins(mv) => println!("Winning move: {} {}", mv.row, mv.col),
        TurnOutcome::HumanWins => println!("The random opponent completed a run"),
        _ => {}
    }
    if let Some(message) = result.outcome.message() {
        println!("{message}");
    }
}
