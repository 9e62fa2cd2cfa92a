//! Core domain types for tic-tac-toe.

use super::error::MoveError;
use serde::Serialize;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Placeholder used when rendering an empty cell.
pub const EMPTY_PLACEHOLDER: char = '_';

/// Symbol a player marks cells with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
pub enum Mark {
    /// X (always moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that moves on the given 1-indexed turn.
    ///
    /// Odd turns belong to X, even turns to O.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 1 { Mark::X } else { Mark::O }
    }

    /// Letter used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Mark),
}

impl Cell {
    /// Returns true if nobody has marked the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A validated (row, col) address on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coordinate; CELL_COUNT] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    /// Creates a coordinate, rejecting rows or columns outside 0-2.
    pub fn new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    // Callers guarantee row and col are in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index of this coordinate (`row * 3 + col`).
    pub fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Cell {
        self.cells[coord.index()]
    }

    // Only GameState marks cells, after checking the cell is empty.
    pub(super) fn set(&mut self, coord: Coordinate, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Row-major snapshot of the marks on the board.
    pub fn marks(&self) -> [Option<Mark>; CELL_COUNT] {
        self.cells.map(Cell::mark)
    }

    /// Formats the board as three `|c0|c1|c2|` lines.
    pub fn render(&self, placeholder: char) -> String {
        self.cells
            .chunks(BOARD_SIZE)
            .map(|row| {
                let mut line = String::from("|");
                for cell in row {
                    line.push(cell.mark().map_or(placeholder, Mark::symbol));
                    line.push('|');
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(EMPTY_PLACEHOLDER))
    }
}
