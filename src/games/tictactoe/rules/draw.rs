//! Board exhaustion logic for tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if every cell on the board is marked.
///
/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Coordinate, Mark};
    use super::super::win::winning_line;
    use super::*;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Coordinate::at(1, 1), Cell::Marked(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (coord, mark) in Coordinate::ALL.into_iter().zip(layout) {
            board.set(coord, Cell::Marked(mark));
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }
}
