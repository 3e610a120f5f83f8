//! Configuration file handling.
//!
//! The config lives at `<config dir>/vtb/config.toml` (override with
//! `VTB_CONFIG`). Every field has a default, so a missing file or a file
//! with only some sections is valid.

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::intake::DEFAULT_SAMPLE_SOURCE;
use crate::media::{is_valid_duration, MAX_DURATION_SECS};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "VTB_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub data: DataConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// `[playback]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Reference used by "load sample"
    pub sample_source: String,
    /// Duration reported for the sample video
    pub sample_duration_secs: f64,
    /// Duration for uploads whose container cannot be probed
    pub fallback_duration_secs: f64,
    /// Seconds moved by the left/right keys
    pub seek_step_secs: f64,
    /// UI refresh interval
    pub tick_rate_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_source: DEFAULT_SAMPLE_SOURCE.to_string(),
            sample_duration_secs: 300.0,
            fallback_duration_secs: 300.0,
            seek_step_secs: 5.0,
            tick_rate_ms: 250,
        }
    }
}

/// `[data]` section: replacement moment/segment files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moments_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments_file: Option<PathBuf>,
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: studio, classic, or ocean
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "studio".to_string(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; no logging when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Filter directive, e.g. `info` or `vtb=debug`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("vtb").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    /// Reject values the player cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let playback = &self.playback;
        let positive = |field: &'static str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                })
            }
        };
        let duration = |field: &'static str, value: f64| {
            if is_valid_duration(value) {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!(
                        "must be between 0 and {} seconds, got {}",
                        MAX_DURATION_SECS, value
                    ),
                })
            }
        };
        duration("playback.sample_duration_secs", playback.sample_duration_secs)?;
        duration("playback.fallback_duration_secs", playback.fallback_duration_secs)?;
        positive("playback.seek_step_secs", playback.seek_step_secs)?;
        if playback.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "playback.tick_rate_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        if playback.sample_source.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "playback.sample_source",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
