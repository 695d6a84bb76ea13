use std::fmt;

use serde::Serialize;

/// One of the two disc colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Black,
    White,
}

impl Piece {
    pub fn opponent(self) -> Self {
        match self {
            Piece::Black => Piece::White,
            Piece::White => Piece::Black,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Piece::Black => 'B',
            Piece::White => 'W',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Black => f.write_str("Black"),
            Piece::White => f.write_str("White"),
        }
    }
}

/// Persistent state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Piece::Black),
            Cell::White => Some(Piece::White),
        }
    }

    pub fn glyph(self) -> char {
        self.piece().map_or('-', Piece::glyph)
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '-' => Some(Cell::Empty),
            'B' => Some(Cell::Black),
            'W' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Black => Cell::Black,
            Piece::White => Cell::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a finished game. The side with strictly more discs wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Tie,
}

impl Winner {
    pub fn from_counts(black_count: usize, white_count: usize) -> Self {
        if black_count > white_count {
            Winner::Black
        } else if white_count > black_count {
            Winner::White
        } else {
            Winner::Tie
        }
    }
}

/// Public game state returned from the session and WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells, 64 entries.
    pub board: Vec<Cell>,
    pub current_player: Piece,
    pub black_count: usize,
    pub white_count: usize,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a normal move.
    pub is_pass: bool,
    /// Contract:
    /// - Normal move: cells flipped by that move.
    /// - Pass: must be an empty list.
    pub flipped: Vec<Position>,
    /// Cells currently legal for `current_player`.
    pub legal_moves: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: usize,
    pub white_count: usize,
}
