use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::error::ConfigError;
use crate::game::Player;

/// Display names for the two seats.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player1: String,
    pub player2: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            player1: Player::One.color_name().to_string(),
            player2: Player::Two.color_name().to_string(),
        }
    }
}

/// Falling-token animation in the terminal front-end.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    /// Milliseconds per row of fall
    pub tick_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            enabled: true,
            tick_ms: 60,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Log file. Without one nothing is logged, since the UI owns the terminal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            file: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Longest allowed pause per row, so a typo can't freeze the board.
    pub const MAX_TICK_MS: u64 = 2_000;

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let player1 = self.players.player1.trim();
        let player2 = self.players.player2.trim();
        if player1.is_empty() || player2.is_empty() {
            return Err(ConfigError::Validation(
                "players.player1 and players.player2 must not be empty".into(),
            ));
        }
        if player1 == player2 {
            return Err(ConfigError::Validation(
                "players.player1 and players.player2 must differ".into(),
            ));
        }

        if self.animation.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.tick_ms must be > 0".into(),
            ));
        }
        if self.animation.tick_ms > Self::MAX_TICK_MS {
            return Err(ConfigError::Validation(format!(
                "animation.tick_ms must be <= {}",
                Self::MAX_TICK_MS
            )));
        }

        if self.logging.level.parse::<LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid level",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
