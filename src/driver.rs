//! Interactive terminal driver.
//!
//! Reads player names and moves from any [`BufRead`], writes prompts and the
//! board to any [`Write`], and only talks to the game through [`GameState`].

use crate::config::DriverConfig;
use crate::games::tictactoe::{GameState, MoveError};
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Prompt shown before reading player names.
pub const NAMES_PROMPT: &str = "Input player names separated by whitespace with player1 going first:";

/// Malformed move input. The game is not consulted.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line did not hold exactly two tokens.
    #[display("Need row and col separated by whitespace!")]
    WrongTokenCount {
        /// Tokens found on the line.
        found: usize,
    },

    /// A token is not an integer.
    #[display("Invalid number '{token}'! Use whole numbers for row and col.")]
    NotAnInteger {
        /// The offending token.
        token: String,
    },

    /// A token is a negative integer, so it can never be on the board.
    #[display("{}", OUT_OF_RANGE_MESSAGE)]
    Negative {
        /// The offending value.
        value: i64,
    },
}

/// Error that ends a driver session early.
#[derive(Debug, Display, Error)]
pub enum DriverError {
    /// Input ended before the game finished.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl From<std::io::Error> for DriverError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

const OUT_OF_RANGE_MESSAGE: &str = "Grid Position is Out of Range! Use (0-2, 0-2).";

/// User-facing message for a rejected move.
pub fn describe_move_error(err: &MoveError) -> &'static str {
    match err {
        MoveError::OutOfRange { .. } => OUT_OF_RANGE_MESSAGE,
        MoveError::CellTaken { .. } => "Spot is taken! Try again.",
        MoveError::GameOver => "Game Finished",
    }
}

/// Splits the player-name line into (X name, O name).
///
/// Missing names fall back to the defaults. Extra names are ignored.
#[instrument(skip(default_x, default_o))]
pub fn parse_player_names(line: &str, default_x: &str, default_o: &str) -> (String, String) {
    let mut names = line.split_whitespace();
    let player_x = names.next().unwrap_or(default_x).to_string();
    let player_o = names.next().unwrap_or(default_o).to_string();
    let extra = names.count();
    if extra > 0 {
        warn!(extra, "Ignoring extra player names");
    }
    (player_x, player_o)
}

/// Parses a move line of the form `row col`.
#[instrument]
pub fn parse_move(line: &str) -> Result<(usize, usize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount {
            found: tokens.len(),
        });
    };
    Ok((parse_index(row)?, parse_index(col)?))
}

fn parse_index(token: &str) -> Result<usize, InputError> {
    let value: i64 = token.parse().map_err(|_| InputError::NotAnInteger {
        token: token.to_string(),
    })?;
    // Values too large for usize are off the board anyway.
    usize::try_from(value).or_else(|_| {
        if value < 0 {
            Err(InputError::Negative { value })
        } else {
            Ok(usize::MAX)
        }
    })
}

/// Runs one interactive game over a reader and a writer.
pub struct Driver<R, W> {
    input: R,
    output: W,
    config: DriverConfig,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver.
    pub fn new(input: R, output: W, config: DriverConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays a full game and returns the finished state.
    ///
    /// # Errors
    ///
    /// [`DriverError::InputClosed`] if input runs out before the game ends,
    /// [`DriverError::Io`] if the terminal cannot be read or written.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameState, DriverError> {
        writeln!(self.output, "{}", NAMES_PROMPT)?;
        let line = self.read_line()?;
        let (player_x, player_o) =
            parse_player_names(&line, self.config.player_x(), self.config.player_o());
        info!(%player_x, %player_o, "Starting game");
        let mut game = GameState::with_players(player_x, player_o);

        while game.is_in_play() {
            write!(
                self.output,
                "Turn {} - {}'s move as row col: ",
                game.turn_number(),
                game.current_player_name()
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            let result = parse_move(&line).map(|(row, col)| game.apply_move(row, col));
            match result {
                Ok(Ok(())) => {
                    writeln!(self.output, "{}", game.render_with(*self.config.placeholder()))?;
                }
                Ok(Err(err)) => {
                    debug!(%err, "Move rejected");
                    writeln!(self.output, "{}", describe_move_error(&err))?;
                }
                Err(err) => {
                    debug!(%err, "Malformed move input");
                    writeln!(self.output, "{}", err)?;
                }
            }
        }

        match game.winner() {
            Some(name) => writeln!(self.output, "Winner is {}!", name)?,
            None => writeln!(self.output, "No winner, please play again.")?,
        }
        self.output.flush()?;
        info!(status = ?game.status(), "Game finished");
        Ok(game)
    }

    fn read_line(&mut self) -> Result<String, DriverError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Terminate the pending prompt before bailing out.
            writeln!(self.output)?;
            return Err(DriverError::InputClosed);
        }
        Ok(line)
    }

    /// Consumes the driver and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 2\n"), Ok((1, 2)));
        assert_eq!(parse_move("  0\t0  "), Ok((0, 0)));
        assert_eq!(parse_move("3 9"), Ok((3, 9)));
    }

    #[test]
    fn test_parse_move_token_count() {
        assert_eq!(parse_move(""), Err(InputError::WrongTokenCount { found: 0 }));
        assert_eq!(parse_move("1"), Err(InputError::WrongTokenCount { found: 1 }));
        assert_eq!(parse_move("1 2 3"), Err(InputError::WrongTokenCount { found: 3 }));
    }

    #[test]
    fn test_parse_move_bad_numbers() {
        assert_eq!(
            parse_move("a 1"),
            Err(InputError::NotAnInteger {
                token: "a".to_string()
            })
        );
        assert_eq!(parse_move("-1 1"), Err(InputError::Negative { value: -1 }));
    }

    #[test]
    fn test_parse_player_names() {
        assert_eq!(
            parse_player_names("\n", "X", "O"),
            ("X".to_string(), "O".to_string())
        );
        assert_eq!(
            parse_player_names("Alice\n", "X", "O"),
            ("Alice".to_string(), "O".to_string())
        );
        assert_eq!(
            parse_player_names("Alice Bob Carol", "X", "O"),
            ("Alice".to_string(), "Bob".to_string())
        );
    }

    #[test]
    fn test_describe_move_error() {
        assert_eq!(
            describe_move_error(&MoveError::CellTaken { row: 0, col: 0 }),
            "Spot is taken! Try again."
        );
        assert_eq!(describe_move_error(&MoveError::GameOver), "Game Finished");
    }
}
