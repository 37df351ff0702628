//! Configuration file handling for ascii-generator.
//!
//! Loads configuration from `~/.config/ascii-generator/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::DEFAULT_THRESHOLD;

/// Built-in output width when neither the CLI nor the config sets one.
pub const DEFAULT_WIDTH: i64 = 100;

/// Configuration file structure for ascii-generator.
/// Loaded from ~/.config/ascii-generator/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: i64,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default = "default_threshold")]
    pub threshold: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            mode: None,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

fn default_width() -> i64 {
    DEFAULT_WIDTH
}

fn default_threshold() -> i32 {
    DEFAULT_THRESHOLD
}

impl Config {
    /// Load configuration from the default location.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}'", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-generator").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-generator/config.toml")
        })
}
