use thiserror::Error;

use crate::types::Piece;

/// Errors raised by the board engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cannot access cell at ({row}, {col})")]
    OutOfRange { row: usize, col: usize },
    #[error("{piece} cannot be placed at ({row}, {col})")]
    IllegalMove { row: usize, col: usize, piece: Piece },
}

/// Errors raised while parsing a textual board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("board must have 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} must have 8 cells, got {len}")]
    RowLength { row: usize, len: usize },
    #[error("invalid cell {glyph:?} at ({row}, {col}); expected '-', 'B' or 'W'")]
    InvalidCell { row: usize, col: usize, glyph: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?}; expected \"random\" or \"greedy\"")]
pub struct ParseStrategyError(pub String);

/// Errors raised by a game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("game is already over")]
    GameOver,
    #[error("it is not a human player's turn")]
    NotHumanTurn,
    #[error("it is not a computer player's turn")]
    NotComputerTurn,
    #[error("{0} has a legal move and cannot pass")]
    PassNotAllowed(Piece),
}
