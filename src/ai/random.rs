use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::types::{Piece, Position};

/// Picks one of `piece`'s legal moves with equal probability.
/// Returns `None` when there is nothing to play.
pub fn random_move<R: Rng + ?Sized>(board: &Board, piece: Piece, rng: &mut R) -> Option<Position> {
    board.legal_moves(piece).choose(rng).copied()
}
