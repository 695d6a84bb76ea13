//! Batch self-play: two strategies play many games and the wins are tallied.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;
use web_time::Instant;

use crate::ai::Strategy;
use crate::board::Board;
use crate::error::BoardError;
use crate::types::{Piece, Winner};

const DEFAULT_GAMES: u64 = 1000;
const DEFAULT_REPORT_EVERY: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub games: u64,
    /// Log progress every this many games; 0 disables progress lines.
    pub report_every: u64,
    pub black: Strategy,
    pub white: Strategy,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            report_every: DEFAULT_REPORT_EVERY,
            black: Strategy::Random,
            white: Strategy::Random,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub games: u64,
    pub black_wins: u64,
    pub white_wins: u64,
    pub ties: u64,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SimulationReport {
    /// Share of games won by `piece`, in percent.
    pub fn win_rate(&self, piece: Piece) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = match piece {
            Piece::Black => self.black_wins,
            Piece::White => self.white_wins,
        };
        100.0 * wins as f64 / self.games as f64
    }
}

/// Plays `config.games` games between the two strategies.
pub fn run(config: &SimulationConfig) -> Result<SimulationReport, BoardError> {
    let mut rng = config
        .seed
        .map(StdRng::seed_from_u64)
        .unwrap_or_else(StdRng::from_entropy);
    let start = Instant::now();
    let mut board = Board::new();
    let mut report = SimulationReport {
        games: config.games,
        black_wins: 0,
        white_wins: 0,
        ties: 0,
        elapsed: Duration::ZERO,
    };

    for game in 1..=config.games {
        board.reset();
        match play_out(&mut board, config.black, config.white, &mut rng)? {
            Winner::Black => report.black_wins += 1,
            Winner::White => report.white_wins += 1,
            Winner::Tie => report.ties += 1,
        }

        if config.report_every > 0 && game % config.report_every == 0 {
            info!(games = game, "games played so far");
        }
    }

    report.elapsed = start.elapsed();
    info!(
        games = report.games,
        black_wins = report.black_wins,
        white_wins = report.white_wins,
        ties = report.ties,
        elapsed_ms = report.elapsed.as_millis() as u64,
        "simulation finished"
    );
    Ok(report)
}

/// Plays `board` to the end. A side with no move simply hands the turn over.
pub fn play_out<R: Rng + ?Sized>(
    board: &mut Board,
    black: Strategy,
    white: Strategy,
    rng: &mut R,
) -> Result<Winner, BoardError> {
    while !board.is_terminal() {
        let piece = board.current_player();
        let strategy = match piece {
            Piece::Black => black,
            Piece::White => white,
        };
        if let Some(mv) = strategy.select_move(board, piece, rng) {
            board.place(mv.row, mv.col, piece)?;
        }
        board.switch_turn();
    }

    Ok(Winner::from_counts(
        board.count_pieces(Piece::Black),
        board.count_pieces(Piece::White),
    ))
}
