//! Configuration management for outbox
//!
//! Handles loading and saving configuration from ~/.config/outbox/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration file name
const CONFIG_FILE: &str = "config.toml";

/// Application name for config directory
const APP_NAME: &str = "outbox";

/// Endpoint used when neither the CLI nor the config names one
pub const DEFAULT_ENDPOINT: &str = "http://localhost:7777";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Endpoint base URL used for share links
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Default share mode (agent or team)
    #[serde(default)]
    pub mode: Option<String>,

    /// Default agent id for agent-mode share links
    #[serde(default)]
    pub agent_id: Option<String>,

    /// Default team id for team-mode share links
    #[serde(default)]
    pub team_id: Option<String>,

    /// Default provider for prompt exports (claude, openai, gemini, mistral)
    #[serde(default)]
    pub default_provider: Option<String>,

    /// Directory exported files are saved into
    #[serde(default)]
    pub download_dir: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path
    ///
    /// Returns ~/.config/outbox/config.toml on Linux/macOS
    pub fn config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Get the config directory path
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join(APP_NAME))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> ConfigResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    ///
    /// Creates the config directory if it doesn't exist
    pub fn save(&self) -> ConfigResult<()> {
        let path = Self::config_path()?;
        let dir = Self::config_dir()?;

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Check if any configuration is set
    pub fn is_empty(&self) -> bool {
        self.endpoint.is_none()
            && self.mode.is_none()
            && self.agent_id.is_none()
            && self.team_id.is_none()
            && self.default_provider.is_none()
            && self.download_dir.is_none()
    }

    /// Get effective endpoint (CLI argument, then config, then default)
    pub fn effective_endpoint(&self, cli_endpoint: Option<&str>) -> String {
        cli_endpoint
            .map(String::from)
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Get effective mode tag (CLI argument, then config, then "agent")
    pub fn effective_mode(&self, cli_mode: Option<&str>) -> String {
        cli_mode
            .map(String::from)
            .or_else(|| self.mode.clone())
            .unwrap_or_else(|| "agent".to_string())
    }

    /// Get effective download directory (CLI argument, then config, then ".")
    pub fn effective_download_dir(&self, cli_dir: Option<&str>) -> PathBuf {
        cli_dir
            .map(PathBuf::from)
            .or_else(|| self.download_dir.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Format the configuration for display
pub fn format_config(config: &Config) -> String {
    let mut lines = Vec::new();

    lines.push("Current configuration:".to_string());
    lines.push(String::new());

    let entries = [
        ("endpoint", &config.endpoint),
        ("mode", &config.mode),
        ("agent_id", &config.agent_id),
        ("team_id", &config.team_id),
        ("default_provider", &config.default_provider),
        ("download_dir", &config.download_dir),
    ];

    for (key, value) in entries {
        match value {
            Some(v) => lines.push(format!("  {} = \"{}\"", key, v)),
            None => lines.push(format!("  {} = (not set)", key)),
        }
    }

    lines.join("\n")
}
