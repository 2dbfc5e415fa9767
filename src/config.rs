use crate::error::{FlashError, FlashResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Application configuration.
///
/// Only startup preferences live here. Session settings (language, colors,
/// frequency) are never written back to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Speech
    pub tts_engine: String,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tts_engine: "system".to_string(),
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> FlashResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> FlashResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = config.validate() {
            tracing::warn!("⚠️ {}, using INFO", e);
            config.log_level = Self::default().log_level;
        }

        Ok(config)
    }

    pub fn validate(&self) -> FlashResult<()> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(FlashError::Config(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Filter directive for `tracing_subscriber::EnvFilter`
    pub fn log_directive(&self) -> String {
        self.log_level.to_lowercase()
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("colorflash")
        .join("config.json")
}
