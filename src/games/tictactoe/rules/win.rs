//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coordinate, Mark};
use tracing::instrument;

/// Three cells that win when marked by the same player.
pub type Line = [Coordinate; 3];

/// The 8 winning lines, in detection order.
///
/// Rows come first, then columns, then diagonals. The first complete line
/// found is the one reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Coordinate::at(0, 0), Coordinate::at(0, 1), Coordinate::at(0, 2)],
    [Coordinate::at(1, 0), Coordinate::at(1, 1), Coordinate::at(1, 2)],
    [Coordinate::at(2, 0), Coordinate::at(2, 1), Coordinate::at(2, 2)],
    // Columns
    [Coordinate::at(0, 0), Coordinate::at(1, 0), Coordinate::at(2, 0)],
    [Coordinate::at(0, 1), Coordinate::at(1, 1), Coordinate::at(2, 1)],
    [Coordinate::at(0, 2), Coordinate::at(1, 2), Coordinate::at(2, 2)],
    // Diagonals
    [Coordinate::at(0, 0), Coordinate::at(1, 1), Coordinate::at(2, 2)],
    [Coordinate::at(0, 2), Coordinate::at(1, 1), Coordinate::at(2, 0)],
];

/// Finds the first complete line on the board.
///
/// Returns the mark that owns the line together with its cells, or `None`
/// when no line is complete.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}
