//! Turn-by-turn game state for tic-tac-toe.
//!
//! [`GameState`] owns the board, the turn counter and the player names. The
//! outcome is re-evaluated after every successful move and the winning mark,
//! once found, is recorded permanently.

use super::error::MoveError;
use super::rules::{is_full, winning_line};
use super::types::{Board, CELL_COUNT, Cell, Coordinate, EMPTY_PLACEHOLDER, Mark};
use serde::Serialize;
use tracing::{debug, instrument};

/// Default display name for the X player.
pub const DEFAULT_PLAYER_X: &str = "X";

/// Default display name for the O player.
pub const DEFAULT_PLAYER_O: &str = "O";

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves are still legal.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board is exhausted with no line.
    Drawn,
}

impl GameStatus {
    /// Returns true once no further moves are legal.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete state of one tic-tac-toe game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Display name of the X player.
    player_x: String,
    /// Display name of the O player.
    player_o: String,
    /// 1-indexed move about to be played (10 once the board is exhausted).
    turn: usize,
    /// Mark that completed a line, set at most once.
    winning_mark: Option<Mark>,
}

impl GameState {
    /// Creates a game with the default player names "X" and "O".
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_PLAYER_X, DEFAULT_PLAYER_O)
    }

    /// Creates a game with custom player names. X moves first.
    #[instrument(skip_all, fields(player_x = %player_x.as_ref(), player_o = %player_o.as_ref()))]
    pub fn with_players(player_x: impl AsRef<str>, player_o: impl AsRef<str>) -> Self {
        Self {
            board: Board::new(),
            player_x: player_x.as_ref().to_string(),
            player_o: player_o.as_ref().to_string(),
            turn: 1,
            winning_mark: None,
        }
    }

    /// Returns true while a move is still legal.
    ///
    /// False once a line has been completed or all 9 moves are played.
    pub fn is_in_play(&self) -> bool {
        !self.status().is_terminal()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winning_mark {
            Some(mark) => GameStatus::Won(mark),
            None if self.turn > CELL_COUNT => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Marks the cell at (`row`, `col`) for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `row` or `col` is outside 0-2.
    /// - [`MoveError::GameOver`] if the game has been won or the board is full.
    /// - [`MoveError::CellTaken`] if the cell is already marked.
    ///
    /// The game is unchanged when an error is returned.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let coord = Coordinate::new(row, col)?;
        if !self.is_in_play() {
            return Err(MoveError::GameOver);
        }
        if !self.board.get(coord).is_empty() {
            return Err(MoveError::CellTaken { row, col });
        }

        let mark = self.current_mark();
        self.board.set(coord, Cell::Marked(mark));
        self.turn += 1;
        debug!(%mark, %coord, next_turn = self.turn, "Move applied");

        self.evaluate_outcome();
        Ok(())
    }

    /// Records the winning mark the first time a line is complete.
    ///
    /// Idempotent: once a winner is recorded it is never changed.
    fn evaluate_outcome(&mut self) {
        if self.winning_mark.is_some() {
            return;
        }
        if let Some((mark, line)) = winning_line(&self.board) {
            debug!(%mark, ?line, "Winning line completed");
            self.winning_mark = Some(mark);
        } else if is_full(&self.board) {
            debug!(turn = self.turn, "Board exhausted without a winner");
        }
    }

    /// Returns the winning player's display name.
    ///
    /// `None` while the game is in play and when it ended in a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.status() {
            GameStatus::Won(mark) => Some(self.player_name(mark)),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }

    /// Returns the mark that completed a line, if any.
    pub fn winning_mark(&self) -> Option<Mark> {
        self.winning_mark
    }

    /// Row-major snapshot of the board: index 0 is (0, 0), index 8 is (2, 2).
    pub fn board(&self) -> [Option<Mark>; CELL_COUNT] {
        self.board.marks()
    }

    /// Returns the cell at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        Ok(self.board.get(Coordinate::new(row, col)?))
    }

    /// Empty cells in row-major order. Empty once the game is over.
    pub fn available_moves(&self) -> Vec<Coordinate> {
        if !self.is_in_play() {
            return Vec::new();
        }
        Coordinate::ALL
            .into_iter()
            .filter(|coord| self.board.get(*coord).is_empty())
            .collect()
    }

    /// 1-indexed number of the move about to be played.
    pub fn turn_number(&self) -> usize {
        self.turn
    }

    /// Mark of the player whose turn it is.
    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.turn)
    }

    /// Display name of the player whose turn it is.
    pub fn current_player_name(&self) -> &str {
        self.player_name(self.current_mark())
    }

    /// Display name of the player using `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x,
            Mark::O => &self.player_o,
        }
    }

    /// Display name of the X player.
    pub fn player_x_name(&self) -> &str {
        &self.player_x
    }

    /// Display name of the O player.
    pub fn player_o_name(&self) -> &str {
        &self.player_o
    }

    /// Renders the board as three `|c0|c1|c2|` lines, `_` marking empty cells.
    pub fn text_render(&self) -> String {
        self.render_with(EMPTY_PLACEHOLDER)
    }

    /// Renders the board using `placeholder` for empty cells.
    pub fn render_with(&self, placeholder: char) -> String {
        self.board.render(placeholder)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text_render())
    }
}
