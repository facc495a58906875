use crate::ticker::DEFAULT_REFRESH_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Log levels accepted in config.json
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field} must be below {limit}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        limit: u32,
    },
    #[error("unknown log level `{0}` (expected one of off, error, warn, info, debug, trace)")]
    LogLevel(String),
    #[error("refresh_ms must be greater than zero")]
    ZeroRefresh,
}

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial picker hours
    pub default_hours: u32,
    /// Initial picker minutes
    pub default_minutes: u32,
    /// Initial picker seconds
    pub default_seconds: u32,
    /// Ring the terminal bell when a countdown completes
    pub sound: bool,
    /// Mirror announcements to desktop notifications (macOS)
    pub desktop_notifications: bool,
    /// UI refresh interval in milliseconds
    pub refresh_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_hours: 0,
            default_minutes: 15,
            default_seconds: 0,
            sound: true,
            desktop_notifications: false,
            refresh_ms: DEFAULT_REFRESH_MS,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("default_hours", self.default_hours, 24)?;
        check_range("default_minutes", self.default_minutes, 60)?;
        check_range("default_seconds", self.default_seconds, 60)?;

        if self.refresh_ms == 0 {
            return Err(ConfigError::ZeroRefresh);
        }

        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, limit: u32) -> Result<(), ConfigError> {
    if value >= limit {
        return Err(ConfigError::OutOfRange { field, value, limit });
    }
    Ok(())
}

/// Load and validate config; a missing file yields the defaults
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Save config to a JSON file
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
