use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{BoardError, ParseBoardError};
use crate::types::{Cell, Piece, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const HINT_GLYPH: char = '*';

// For every square, the squares visited when stepping outward in each direction.
static RAYS: Lazy<Vec<[Vec<usize>; 8]>> = Lazy::new(|| {
    (0..NUM_SQUARES)
        .map(|pos| {
            let (row, col) = pos_to_row_col(pos);
            std::array::from_fn(|dir| {
                let (dr, dc) = DIRECTIONS[dir];
                let mut ray = Vec::with_capacity(BOARD_SIZE - 1);
                let mut r = row + dr;
                let mut c = col + dc;
                while in_bounds(r, c) {
                    ray.push((r as usize) * BOARD_SIZE + c as usize);
                    r += dr;
                    c += dc;
                }
                ray
            })
        })
        .collect()
});

/// Othello board: an 8x8 grid of cells plus the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
    current: Piece,
}

impl Board {
    /// Creates a board in the opening position:
    /// (3,3)=(4,4)=black, (3,4)=(4,3)=white, black to move.
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; NUM_SQUARES],
            current: Piece::Black,
        };
        board.reset();
        board
    }

    /// Clears the grid and restores the opening position.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_SQUARES];
        self.cells[idx(3, 3)] = Cell::Black;
        self.cells[idx(4, 4)] = Cell::Black;
        self.cells[idx(3, 4)] = Cell::White;
        self.cells[idx(4, 3)] = Cell::White;
        self.current = Piece::Black;
    }

    pub fn current_player(&self) -> Piece {
        self.current
    }

    pub fn opponent_of(&self, piece: Piece) -> Piece {
        piece.opponent()
    }

    /// Hands the move to the other side. Whether that side can move is the
    /// caller's concern.
    pub fn switch_turn(&mut self) {
        self.current = self.current.opponent();
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[checked_index(row, col)?])
    }

    /// Row-major snapshot of the grid.
    pub fn cells(&self) -> [Cell; NUM_SQUARES] {
        self.cells
    }

    /// Returns whether `piece` may be placed at `(row, col)`.
    pub fn is_legal_move(&self, row: usize, col: usize, piece: Piece) -> Result<bool, BoardError> {
        let pos = checked_index(row, col)?;
        Ok(self.capture_runs(pos, piece).iter().any(|&run| run > 0))
    }

    /// Number of opponent discs that placing `piece` at `(row, col)` would flip.
    /// Zero for occupied cells and for cells without a capture line.
    pub fn capture_value(&self, row: usize, col: usize, piece: Piece) -> Result<usize, BoardError> {
        let pos = checked_index(row, col)?;
        Ok(self.capture_runs(pos, piece).iter().sum())
    }

    /// Places `piece` at `(row, col)` and flips every captured line.
    /// Returns the flipped positions.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<Vec<Position>, BoardError> {
        let pos = checked_index(row, col)?;
        let runs = self.capture_runs(pos, piece);
        if runs.iter().all(|&run| run == 0) {
            return Err(BoardError::IllegalMove { row, col, piece });
        }

        let me = Cell::from(piece);
        self.cells[pos] = me;

        let mut flipped = Vec::new();
        for (ray, &run) in RAYS[pos].iter().zip(runs.iter()) {
            for &square in &ray[..run] {
                self.cells[square] = me;
                let (r, c) = pos_to_row_col(square);
                flipped.push(Position::new(r as usize, c as usize));
            }
        }

        Ok(flipped)
    }

    /// Legal cells for `piece` in row-major order.
    pub fn legal_moves(&self, piece: Piece) -> Vec<Position> {
        (0..NUM_SQUARES)
            .filter(|&pos| self.capture_runs(pos, piece).iter().any(|&run| run > 0))
            .map(|pos| Position::new(pos / BOARD_SIZE, pos % BOARD_SIZE))
            .collect()
    }

    pub fn has_legal_move(&self, piece: Piece) -> bool {
        (0..NUM_SQUARES).any(|pos| self.capture_runs(pos, piece).iter().any(|&run| run > 0))
    }

    /// True when the grid is full or neither side has a capturing move anywhere.
    pub fn is_terminal(&self) -> bool {
        self.empty_count() == 0
            || (!self.has_legal_move(Piece::Black) && !self.has_legal_move(Piece::White))
    }

    pub fn count_pieces(&self, piece: Piece) -> usize {
        let target = Cell::from(piece);
        self.cells.iter().filter(|&&cell| cell == target).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Empty).count()
    }

    /// Text rendering with `*` on every cell legal for `hints`.
    /// The grid itself is never touched.
    pub fn render(&self, hints: Option<Piece>) -> String {
        let legal = hints.map(|piece| self.legal_moves(piece)).unwrap_or_default();
        let mut out = String::new();

        out.push_str("  0 1 2 3 4 5 6 7\n");
        for row in 0..BOARD_SIZE {
            out.push_str(&row.to_string());
            for col in 0..BOARD_SIZE {
                out.push(' ');
                if legal.contains(&Position::new(row, col)) {
                    out.push(HINT_GLYPH);
                } else {
                    out.push(self.cells[idx(row, col)].glyph());
                }
            }
            out.push('\n');
        }

        out
    }

    // Opponent run length per direction; zero where no capture line exists.
    fn capture_runs(&self, pos: usize, piece: Piece) -> [usize; 8] {
        let mut runs = [0usize; 8];
        if self.cells[pos] != Cell::Empty {
            return runs;
        }

        let me = Cell::from(piece);
        let opp = Cell::from(piece.opponent());

        for (run, ray) in runs.iter_mut().zip(RAYS[pos].iter()) {
            let mut len = 0;
            for &square in ray {
                let cell = self.cells[square];
                if cell == opp {
                    len += 1;
                    continue;
                }
                if cell == me && len > 0 {
                    *run = len;
                }
                break;
            }
        }

        runs
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Parses eight rows of eight `-`/`B`/`W` glyphs. Whitespace inside a row
/// and blank lines are ignored. Black moves first.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut cells = [Cell::Empty; NUM_SQUARES];
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                cells[idx(row, col)] = Cell::from_glyph(glyph)
                    .ok_or(ParseBoardError::InvalidCell { row, col, glyph })?;
            }
        }

        Ok(Self {
            cells,
            current: Piece::Black,
        })
    }
}

fn idx(row: usize, col: usize) -> usize {
    row * BOARD_SIZE + col
}

fn checked_index(row: usize, col: usize) -> Result<usize, BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::OutOfRange { row, col });
    }
    Ok(idx(row, col))
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / BOARD_SIZE) as i32, (pos % BOARD_SIZE) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}
