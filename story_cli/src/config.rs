//! CLI configuration, read from an optional TOML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors that can occur while reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {detail}")]
    Parse { path: PathBuf, detail: String },
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub content: ContentConfig,
    pub terminal: TerminalConfig,
}

/// Where the story comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding one scene file per scene.
    pub scenes_dir: PathBuf,
    /// Id of the first scene.
    pub start: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            scenes_dir: PathBuf::from("scenes"),
            start: "start".to_string(),
        }
    }
}

/// Terminal presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Print body text one character at a time.
    pub typewriter: bool,
    /// Base delay between characters.
    pub char_delay_ms: u64,
    /// Upper bound of the random extra delay per character.
    pub jitter_ms: u64,
    /// Show choices in random order.
    pub shuffle_choices: bool,
    pub clear_screen: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            typewriter: true,
            char_delay_ms: 1,
            jitter_ms: 10,
            shuffle_choices: true,
            clear_screen: true,
        }
    }
}

impl TerminalConfig {
    pub fn char_delay(&self) -> Duration {
        Duration::from_millis(self.char_delay_ms)
    }
}

impl CliConfig {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|detail| ConfigError::Parse {
            path: path.to_path_buf(),
            detail,
        })
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
