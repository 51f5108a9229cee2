use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::{
    DEFAULT_COLORS, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION, MAX_PLAYERS, MIN_DIMENSION,
    MIN_PLAYERS,
};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

/// Board size and the setup form's starting values.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    /// One suggested color per seat, in seat order.
    pub default_colors: Vec<String>,
    pub default_player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
            default_colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            default_player_count: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Get the colors of the first `default_player_count` seats
    pub fn starting_colors(&self) -> &[String] {
        let count = self.default_player_count.min(self.default_colors.len());
        &self.default_colors[..count]
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Log file for the terminal UI. Without one the UI does not log.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let game = &self.game;

        let sides = MIN_DIMENSION..=MAX_DIMENSION;
        if !sides.contains(&game.height) {
            return Err(ConfigError::Validation(format!(
                "game.height must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if !sides.contains(&game.width) {
            return Err(ConfigError::Validation(format!(
                "game.width must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&game.default_player_count) {
            return Err(ConfigError::Validation(format!(
                "game.default_player_count must be in [{MIN_PLAYERS}, {MAX_PLAYERS}]"
            )));
        }
        if game.default_colors.len() < MAX_PLAYERS {
            return Err(ConfigError::Validation(format!(
                "game.default_colors must list at least {MAX_PLAYERS} colors"
            )));
        }

        let mut seen = HashSet::new();
        for color in &game.default_colors {
            let color = color.trim();
            if color.is_empty() {
                return Err(ConfigError::Validation(
                    "game.default_colors must not contain blank colors".into(),
                ));
            }
            if !seen.insert(color) {
                return Err(ConfigError::Validation(format!(
                    "game.default_colors lists '{color}' more than once"
                )));
            }
        }

        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level is not a valid filter: {e}"
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game.starting_colors(), ["red", "blue"]);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
width = 9
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.width, 9);
        // Other fields should be defaults
        assert_eq!(config.game.height, 6);
        assert_eq!(config.game.default_colors.len(), 4);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.height, default.game.height);
        assert_eq!(config.game.default_colors, default.game.default_colors);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = AppConfig::default();
        config.game.height = 3;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.width = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_board() {
        let mut config = AppConfig::default();
        config.game.height = 65_533;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.width = MAX_DIMENSION + 1;
        assert!(config.validate().is_err());

        config.game.width = MAX_DIMENSION;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_player_count_out_of_range() {
        let mut config = AppConfig::default();
        config.game.default_player_count = 1;
        assert!(config.validate().is_err());

        config.game.default_player_count = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_color_list() {
        let mut config = AppConfig::default();
        config.game.default_colors.truncate(3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_or_blank_colors() {
        let mut config = AppConfig::default();
        config.game.default_colors[3] = "red".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.default_colors[1] = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "connect_four=loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_starting_colors_follow_player_count() {
        let mut config = AppConfig::default();
        config.game.default_player_count = 3;
        assert_eq!(config.game.starting_colors(), ["red", "blue", "green"]);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.width, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
height = 8
default_player_count = 4

[logging]
level = "debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.height, 8);
        assert_eq!(config.game.starting_colors().len(), 4);
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.game.width, 7);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nwidth = 3\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
