use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::ai::Strategy;
use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameResult, GameState, Piece, Position, Winner};

/// Who makes the decisions for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer(Strategy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub black: Controller,
    pub white: Controller,
    /// Seed for computer move selection; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            black: Controller::Human,
            white: Controller::Computer(Strategy::Random),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn controller(&self, piece: Piece) -> Controller {
        match piece {
            Piece::Black => self.black,
            Piece::White => self.white,
        }
    }
}

/// One game session: the board plus the bookkeeping a front end needs.
pub struct GameInstance {
    board: Board,
    config: GameConfig,
    rng: StdRng,
    pub is_pass: bool,
    pub flipped: Vec<Position>,
}

impl GameInstance {
    pub fn new(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map(StdRng::seed_from_u64)
            .unwrap_or_else(StdRng::from_entropy);
        Self {
            board: Board::new(),
            config,
            rng,
            is_pass: false,
            flipped: Vec::new(),
        }
    }

    /// Starts a fresh game with the same controllers.
    pub fn reset(&mut self) {
        self.board.reset();
        self.is_pass = false;
        self.flipped.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_player(&self) -> Piece {
        self.board.current_player()
    }

    pub fn current_controller(&self) -> Controller {
        self.config.controller(self.current_player())
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.has_legal_move(self.current_player())
    }

    pub fn get_legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.current_player())
    }

    /// Human move for the side to play.
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.current_controller() != Controller::Human {
            return Err(GameError::NotHumanTurn);
        }

        self.apply_move(row, col)
    }

    /// Lets the computer play for the side to move. A computer with nothing
    /// to play passes; the chosen cell is returned otherwise.
    pub fn computer_move(&mut self) -> Result<Option<Position>, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let Controller::Computer(strategy) = self.current_controller() else {
            return Err(GameError::NotComputerTurn);
        };

        let piece = self.current_player();
        match strategy.select_move(&self.board, piece, &mut self.rng) {
            Some(mv) => {
                self.apply_move(mv.row, mv.col)?;
                Ok(Some(mv))
            }
            None => {
                self.record_pass();
                Ok(None)
            }
        }
    }

    /// Passes the turn. Only allowed when the side to move cannot play.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.has_legal_moves_for_current() {
            return Err(GameError::PassNotAllowed(self.current_player()));
        }

        self.record_pass();
        Ok(())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.cells().to_vec(),
            current_player: self.current_player(),
            black_count: self.board.count_pieces(Piece::Black),
            white_count: self.board.count_pieces(Piece::White),
            is_game_over: self.is_game_over(),
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
            legal_moves: self.get_legal_moves(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let black_count = self.board.count_pieces(Piece::Black);
        let white_count = self.board.count_pieces(Piece::White);
        GameResult {
            winner: Winner::from_counts(black_count, white_count),
            black_count,
            white_count,
        }
    }

    fn apply_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let piece = self.current_player();
        let flipped = self.board.place(row, col, piece)?;
        debug!(%piece, row, col, flipped = flipped.len(), "move played");

        self.is_pass = false;
        self.flipped = flipped;
        self.board.switch_turn();
        Ok(())
    }

    fn record_pass(&mut self) {
        debug!(piece = %self.current_player(), "pass");
        self.is_pass = true;
        self.flipped.clear();
        self.board.switch_turn();
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Piece) {
        self.board = board;
        if self.board.current_player() != current_player {
            self.board.switch_turn();
        }
        self.is_pass = false;
        self.flipped.clear();
    }
}
