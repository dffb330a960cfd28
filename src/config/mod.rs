//! Configuration module

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

/// JSON-RPC endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Endpoint URL (e.g., "http://localhost:8545")
    #[serde(default)]
    pub url: Option<String>,

    /// Bearer token sent in the Authorization header
    #[serde(default)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_server_timeout")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: None,
            token: None,
            timeout_secs: default_server_timeout(),
            headers: BTreeMap::new(),
        }
    }
}

fn default_server_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// First automatic id handed out by the client (used when `--id` is omitted)
    #[serde(default = "default_first_id")]
    pub first_id: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            first_id: default_first_id(),
        }
    }
}

fn default_first_id() -> i64 {
    1
}

impl Config {
    /// Load config from default locations
    pub fn load() -> Result<Self> {
        // Try local config first, then global
        if let Some(local) = Self::find_local_config() {
            return Self::load_from(&local);
        }

        if let Some(global) = Self::global_config_path() {
            if global.exists() {
                return Self::load_from(&global);
            }
        }

        Ok(Self::default())
    }

    /// Load from an explicit path if given, otherwise from default locations
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Find local .jrpc/config.toml walking up directories
    pub fn find_local_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_config_from(&current)
    }

    fn find_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let config_path = current.join(".jrpc").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Get global config path (~/.jrpc/config.toml)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::UserDirs::new().map(|u| u.home_dir().join(".jrpc").join("config.toml"))
    }
}
