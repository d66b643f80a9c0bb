//! Application configuration management.
//!
//! This module handles loading and saving the client configuration,
//! which includes the auth service base URL and the last used username
//! (for pre-filling login forms; never treated as an identity claim).
//!
//! Configuration is stored at `~/.config/authcache/config.json`. The
//! base URL can be overridden with the `AUTHCACHE_BASE_URL` environment
//! variable, loaded from a `.env` file if one is present.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "authcache";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the auth service base URL
const BASE_URL_ENV: &str = "AUTHCACHE_BASE_URL";

/// Default auth service base URL
const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub last_username: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the auth service base URL: environment first (with .env
    /// support), then the config file, then the default.
    pub fn resolve_base_url(&self) -> String {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                return url;
            }
        }
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
