//! Configuration management for the random-play client

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use crate::error::ClientError;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Number of games played by a default run
pub const DEFAULT_GAMES: u32 = 50;
/// Maximum number of actions performed in one game
pub const DEFAULT_MAX_MOVES: u32 = 500;

/// Main configuration for the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Game server connection
    #[serde(default)]
    pub server: ServerConfig,
    /// Run shape
    #[serde(default)]
    pub run: RunConfig,
}

/// Where the game server lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the game server, without trailing path
    pub base_url: String,
    /// Per-request timeout in seconds (0 disables the timeout)
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Server config pointing at `base_url` with default timeouts
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Request timeout, `None` when disabled
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// How many games to play and how long each may last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of independent games in one run
    pub games: u32,
    /// Move cap per game
    pub max_moves: u32,
    /// Seed for the move policy; a fresh entropy seed is used when absent
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            max_moves: DEFAULT_MAX_MOVES,
            seed: None,
        }
    }
}

impl PlayerConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ClientError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClientError::Configuration {
                message: format!("Failed to read config file: {}", e),
                field: "config_file".to_string(),
            }
        })?;

        let config: PlayerConfig = toml::from_str(&content).map_err(|e| {
            ClientError::Configuration {
                message: format!("Failed to parse config file: {}", e),
                field: "config_format".to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ClientError> {
        let content = toml::to_string_pretty(self).map_err(|e| {
            ClientError::Configuration {
                message: format!("Failed to serialize config: {}", e),
                field: "config_serialization".to_string(),
            }
        })?;

        fs::write(path, content).map_err(|e| {
            ClientError::Configuration {
                message: format!("Failed to write config file: {}", e),
                field: "config_write".to_string(),
            }
        })?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = reqwest::Url::parse(&self.server.base_url).map_err(|e| {
            ClientError::Configuration {
                message: format!("Invalid base URL '{}': {}", self.server.base_url, e),
                field: "server.base_url".to_string(),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Configuration {
                message: format!("Base URL must use http or https, got '{}'", url.scheme()),
                field: "server.base_url".to_string(),
            });
        }

        if self.run.games == 0 {
            return Err(ClientError::Configuration {
                message: "Game count must be greater than 0".to_string(),
                field: "run.games".to_string(),
            });
        }

        if self.run.max_moves == 0 {
            return Err(ClientError::Configuration {
                message: "Move cap must be greater than 0".to_string(),
                field: "run.max_moves".to_string(),
            });
        }

        Ok(())
    }
}
