//! Tests for the interactive terminal driver.

use std::io::Cursor;
use tic_tac_toe::{Driver, DriverConfig, DriverError, GameState, GameStatus, Mark, NAMES_PROMPT};

fn run_session(input: &str, config: DriverConfig) -> (Result<GameState, DriverError>, String) {
    let mut driver = Driver::new(Cursor::new(input.as_bytes()), Vec::new(), config);
    let result = driver.run();
    let output = String::from_utf8(driver.into_output()).expect("utf-8 output");
    (result, output)
}

#[test]
fn test_full_session_with_winner() {
    let input = "Alice Bob\n0 0\n1 1\n0 1\n1 0\n0 2\n";
    let (result, output) = run_session(input, DriverConfig::default());

    let game = result.expect("session completes");
    assert_eq!(game.winner(), Some("Alice"));

    let expected = format!(
        "{NAMES_PROMPT}\n\
         Turn 1 - Alice's move as row col: |X|_|_|\n|_|_|_|\n|_|_|_|\n\
         Turn 2 - Bob's move as row col: |X|_|_|\n|_|O|_|\n|_|_|_|\n\
         Turn 3 - Alice's move as row col: |X|X|_|\n|_|O|_|\n|_|_|_|\n\
         Turn 4 - Bob's move as row col: |X|X|_|\n|O|O|_|\n|_|_|_|\n\
         Turn 5 - Alice's move as row col: |X|X|X|\n|O|O|_|\n|_|_|_|\n\
         Winner is Alice!\n"
    );
    assert_eq!(output, expected);
}

#[test]
fn test_errors_reprompt_without_advancing() {
    let input = "\n1 1\n1 1\n3 0\nfoo 1\n1\n-1 2\n0 0\n";
    let (result, output) = run_session(input, DriverConfig::default());

    assert!(matches!(result, Err(DriverError::InputClosed)));
    assert!(output.contains("Spot is taken! Try again.\n"));
    assert!(output.contains("Grid Position is Out of Range! Use (0-2, 0-2).\n"));
    assert!(output.contains("Invalid number 'foo'!"));
    assert!(output.contains("Need row and col separated by whitespace!\n"));
    assert_eq!(output.matches("Turn 2 - O's move").count(), 6);
    assert!(output.contains("Turn 3 - X's move as row col: \n"));
}

#[test]
fn test_draw_session() {
    let input = "\n0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n";
    let (result, output) = run_session(input, DriverConfig::default());

    let game = result.expect("session completes");
    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(output.starts_with(NAMES_PROMPT));
    assert!(output.contains("Turn 9 - X's move as row col: "));
    assert!(output.ends_with("|X|O|X|\n|X|O|O|\n|O|X|X|\nNo winner, please play again.\n"));
}

#[test]
fn test_config_names_and_placeholder() {
    let config = DriverConfig::from_toml("player_x = \"Ann\"\nplayer_o = \"Ben\"\nplaceholder = \".\"")
        .expect("valid config");
    let input = "\n1 1\n";
    let (result, output) = run_session(input, config);

    assert!(matches!(result, Err(DriverError::InputClosed)));
    assert!(output.contains("Turn 1 - Ann's move as row col: |.|.|.|\n|.|X|.|\n|.|.|.|\n"));
    assert!(output.contains("Turn 2 - Ben's move"));
}

#[test]
fn test_single_name_keeps_default_o() {
    let input = "Alice\n0 0\n";
    let (result, output) = run_session(input, DriverConfig::default());

    assert!(result.is_err());
    assert!(output.contains("Turn 2 - O's move"));
}

#[test]
fn test_o_wins_session() {
    let input = "Alice Bob\n0 0\n1 0\n0 1\n1 1\n2 2\n1 2\n";
    let (result, output) = run_session(input, DriverConfig::default());

    let game = result.expect("session completes");
    assert_eq!(game.winning_mark(), Some(Mark::O));
    assert!(output.ends_with("Winner is Bob!\n"));
}

#[test]
fn test_closed_input_before_names() {
    let (result, output) = run_session("", DriverConfig::default());
    assert!(matches!(result, Err(DriverError::InputClosed)));
    assert_eq!(output, format!("{NAMES_PROMPT}\n\n"));
}
