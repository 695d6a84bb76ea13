//! Othello on the command line.
//!
//! ## Usage
//!
//! - `othello play` - Play against the computer (black moves first)
//! - `othello play --friend` - Two humans share the keyboard
//! - `othello simulate --games 10000 --black greedy` - Tally computer-vs-computer results

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use othello::console::{self, ConsoleOptions};
use othello::game::{Controller, GameConfig};
use othello::sim::{self, SimulationConfig};
use othello::{Piece, Strategy};

/// Othello with random and greedy computer opponents
#[derive(Parser)]
#[command(name = "othello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game in the terminal
    Play {
        /// Computer strategy: random or greedy
        #[arg(long, default_value_t = Strategy::Random)]
        strategy: Strategy,
        /// Let the computer move first
        #[arg(long)]
        second: bool,
        /// Two human players, no computer
        #[arg(long)]
        friend: bool,
        /// Mark legal cells with '*'
        #[arg(long)]
        show_moves: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play many computer-vs-computer games and report win rates
    Simulate {
        #[arg(long, default_value_t = 1000)]
        games: u64,
        /// Log progress every N games (0 = never)
        #[arg(long, default_value_t = 100)]
        report_every: u64,
        #[arg(long, default_value_t = Strategy::Random)]
        black: Strategy,
        #[arg(long, default_value_t = Strategy::Random)]
        white: Strategy,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            strategy,
            second,
            friend,
            show_moves,
            seed,
        }) => {
            let computer = Controller::Computer(strategy);
            let (black, white) = match (friend, second) {
                (true, _) => (Controller::Human, Controller::Human),
                (false, false) => (Controller::Human, computer),
                (false, true) => (computer, Controller::Human),
            };
            let options = ConsoleOptions {
                config: GameConfig { black, white, seed },
                show_moves,
            };
            console::play(io::stdin().lock(), io::stdout().lock(), options)?;
        }
        Some(Commands::Simulate {
            games,
            report_every,
            black,
            white,
            seed,
        }) => {
            let config = SimulationConfig {
                games,
                report_every,
                black,
                white,
                seed,
            };
            let report = sim::run(&config)?;

            println!("We ran {} games.", report.games);
            println!("Here are the results!");
            println!(
                "White wins ({:.2}%): {}",
                report.win_rate(Piece::White),
                report.white_wins
            );
            println!(
                "Black wins ({:.2}%): {}",
                report.win_rate(Piece::Black),
                report.black_wins
            );
            println!("Ties: {}", report.ties);
            println!("Elapsed: {:.2?}", report.elapsed);
        }
        None => {
            console::play(
                io::stdin().lock(),
                io::stdout().lock(),
                ConsoleOptions::default(),
            )?;
        }
    }

    Ok(())
}
