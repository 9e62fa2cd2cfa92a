//! Terminal driver configuration.

use crate::games::tictactoe::{DEFAULT_PLAYER_O, DEFAULT_PLAYER_X, EMPTY_PLACEHOLDER};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal driver, loadable from TOML.
///
/// Every field is optional in the file:
///
/// ```toml
/// player_x = "Alice"
/// player_o = "Bob"
/// placeholder = "."
/// log_filter = "tic_tac_toe=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DriverConfig {
    /// Name used for X when the player-name line is blank.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name used for O when the player-name line gives fewer than two names.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// Character rendered in empty cells.
    #[serde(default = "default_placeholder")]
    placeholder: char,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_x() -> String {
    DEFAULT_PLAYER_X.to_string()
}

fn default_player_o() -> String {
    DEFAULT_PLAYER_O.to_string()
}

fn default_placeholder() -> char {
    EMPTY_PLACEHOLDER
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            placeholder: default_placeholder(),
            log_filter: default_log_filter(),
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the empty-cell placeholder.
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
