//! Tic-tac-toe rules engine.

mod error;
mod game;
pub mod rules;
mod types;

pub use error::MoveError;
pub use game::{DEFAULT_PLAYER_O, DEFAULT_PLAYER_X, GameState, GameStatus};
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Coordinate, EMPTY_PLACEHOLDER, Mark};
