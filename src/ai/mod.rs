//! One-ply move selection.
//!
//! Both strategies are pure functions of a board view and a piece; neither
//! mutates the board. Callers apply the returned move with `Board::place`
//! and then `Board::switch_turn`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::board::Board;
use crate::error::ParseStrategyError;
use crate::types::{Piece, Position};

pub mod greedy;
pub mod random;

pub use greedy::greedy_move;
pub use random::random_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Uniform choice among legal moves.
    #[default]
    Random,
    /// Largest immediate capture, earliest cell in row-major order on ties.
    Greedy,
}

impl Strategy {
    pub fn select_move<R: Rng + ?Sized>(
        self,
        board: &Board,
        piece: Piece,
        rng: &mut R,
    ) -> Option<Position> {
        match self {
            Strategy::Random => random_move(board, piece, rng),
            Strategy::Greedy => greedy_move(board, piece),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" | "best" => Ok(Strategy::Greedy),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => f.write_str("random"),
            Strategy::Greedy => f.write_str("greedy"),
        }
    }
}
