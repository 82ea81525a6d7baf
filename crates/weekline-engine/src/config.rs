//! Configuration for weekline.
//!
//! Stored as JSON, by default at `.weekline/config.json`. Every field has a
//! default, so a partial or missing file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".weekline/config.json";

/// Smallest accepted UI tick interval. Lower values are raised to this.
pub const MIN_TICK_RATE_MS: u64 = 50;

/// Main configuration for weekline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task file to open when none is given on the command line.
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,

    /// UI tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Width of the task name column in the timeline grid.
    #[serde(default = "default_label_width")]
    pub label_width: u16,

    /// Whether to draw the today marker.
    #[serde(default = "default_show_today_marker")]
    pub show_today_marker: bool,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_label_width() -> u16 {
    18
}

fn default_show_today_marker() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: None,
            tick_rate_ms: default_tick_rate_ms(),
            label_width: default_label_width(),
            show_today_marker: default_show_today_marker(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(config.clamped())
    }

    fn clamped(mut self) -> Self {
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            tracing::warn!(
                tick_rate_ms = self.tick_rate_ms,
                min = MIN_TICK_RATE_MS,
                "tick rate too low, raising to minimum"
            );
            self.tick_rate_ms = MIN_TICK_RATE_MS;
        }
        self
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.label_width, 18);
        assert!(config.show_today_marker);
        assert!(config.tasks_file.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"label_width": 30}"#).unwrap();
        assert_eq!(config.label_width, 30);
        assert_eq!(config.tick_rate_ms, 250);
        assert!(config.show_today_marker);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            tasks_file: Some(PathBuf::from("plan.json")),
            show_today_marker: false,
            ..Config::default()
        };

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_zero_tick_rate_is_raised_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tick_rate_ms": 0}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.tick_rate_ms, MIN_TICK_RATE_MS);
        assert_eq!(config.label_width, 18);
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }
}
