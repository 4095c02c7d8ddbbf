use std::path::PathBuf;

use crate::game::{Phase, COLS};

/// Caller misuse of the engine. Nothing is changed when one of these is
/// returned; a correct front-end never triggers them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("column {column} is out of range (expected 0..{})", COLS)]
    InvalidColumn { column: usize },

    #[error("game is already over ({phase:?})")]
    GameOver { phase: Phase },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur when installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("log file path has no file name: {0}")]
    InvalidPath(PathBuf),

    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_invalid_column_display() {
        let err = ContractViolation::InvalidColumn { column: 9 };
        assert_eq!(err.to_string(), "column 9 is out of range (expected 0..7)");
    }

    #[test]
    fn test_game_over_display() {
        let err = ContractViolation::GameOver {
            phase: Phase::Won(Player::Two),
        };
        assert_eq!(err.to_string(), "game is already over (Won(Two))");

        let err = ContractViolation::GameOver { phase: Phase::Tied };
        assert_eq!(err.to_string(), "game is already over (Tied)");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("animation.tick_ms must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: animation.tick_ms must be > 0"
        );
    }
}
