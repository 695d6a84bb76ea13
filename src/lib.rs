use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod console;
pub mod error;
pub mod game;
pub mod sim;
pub mod types;
pub mod wasm;

pub use ai::Strategy;
pub use board::Board;
pub use error::{BoardError, GameError};
pub use types::{Cell, Piece, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
