//! Tic-tac-toe rules engine and terminal driver.
//!
//! # Architecture
//!
//! - **Game**: [`GameState`] owns the 3x3 board, the turn counter and the
//!   player names, and decides whether a move is legal and who won.
//! - **Rules**: pure win-line and full-board checks over a [`Board`].
//! - **Driver**: the interactive terminal loop, generic over any reader and
//!   writer.
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::GameState;
//!
//! let mut game = GameState::with_players("Alice", "Bob");
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     game.apply_move(row, col)?;
//! }
//! assert!(!game.is_in_play());
//! assert_eq!(game.winner(), Some("Alice"));
//! # Ok::<(), tic_tac_toe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, DriverConfig};

// Crate-level exports - Terminal driver
pub use driver::{
    Driver, DriverError, InputError, NAMES_PROMPT, describe_move_error, parse_move,
    parse_player_names,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, CELL_COUNT, Cell, Coordinate, DEFAULT_PLAYER_O, DEFAULT_PLAYER_X,
    EMPTY_PLACEHOLDER, GameState, GameStatus, Mark, MoveError, rules,
};
