//! Move error types.

use derive_more::{Display, Error};

/// Error that can occur when applying a move.
///
/// Every variant leaves the game untouched, so the caller can retry with a
/// corrected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Row or column is outside 0-2.
    #[display("Position ({row}, {col}) is off the board (use 0-2, 0-2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell is already marked.
    #[display("Cell ({row}, {col}) is already marked")]
    CellTaken {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has already been won or the board is full.
    #[display("Game is already over")]
    GameOver,
}
