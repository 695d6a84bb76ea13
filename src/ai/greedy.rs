use crate::board::{BOARD_SIZE, Board};
use crate::types::{Piece, Position};

/// Picks the cell that flips the most discs right now.
///
/// Cells are scanned in row-major order and the best is only replaced on a
/// strictly greater capture value, so the first maximum found wins.
pub fn greedy_move(board: &Board, piece: Piece) -> Option<Position> {
    let mut best = None;
    let mut max = 0;

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let value = board.capture_value(row, col, piece).unwrap_or_default();
            if value > max {
                max = value;
                best = Some(Position::new(row, col));
            }
        }
    }

    best
}
