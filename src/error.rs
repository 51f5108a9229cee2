use std::path::PathBuf;

/// Why a list of player colors was rejected by [`GameEngine::start`].
///
/// [`GameEngine::start`]: crate::game::GameEngine::start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerSetupError {
    #[error("expected {min} to {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("player {position} has an empty color")]
    EmptyColor { position: usize },

    #[error("color '{0}' is used by more than one player")]
    DuplicateColor(String),
}

/// Errors reported by the board and the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board sides must be between 4 and 64, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("invalid player setup: {0}")]
    InvalidPlayerSetup(#[from] PlayerSetupError),

    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("row {row} is outside the board (height {height})")]
    InvalidRow { row: usize, height: usize },
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
