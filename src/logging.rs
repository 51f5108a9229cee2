//! Tracing subscriber setup for the two front ends.
//!
//! The headless runner logs to stderr so stdout carries nothing but outcome
//! lines. The terminal UI owns the screen, so it only logs when a file is
//! configured.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install a subscriber that writes to stderr.
pub fn init_stderr(config: &LoggingConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true);

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init();
}

/// Install a subscriber that appends to `config.file`.
///
/// Returns `Ok(false)` without installing anything when no file is configured.
pub fn init_file(config: &LoggingConfig) -> io::Result<bool> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init();

    tracing::info!(path = %path.display(), "file logging initialized");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_file_without_path_is_a_no_op() {
        let config = LoggingConfig::default();
        assert!(!init_file(&config).unwrap());
    }

    #[test]
    fn test_init_file_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.log");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(path.clone()),
        };

        assert!(init_file(&config).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn test_init_file_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            file: Some(dir.path().join("missing").join("game.log")),
        };

        assert!(init_file(&config).is_err());
    }
}
