//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: the
//! backend location, where the session is kept, and the last LSC code used.
//!
//! Configuration is stored at `~/.config/lsc-portal/config.json`. The
//! `LSC_PORTAL_API_URL` environment variable overrides the backend location.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::auth::{FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "lsc-portal";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "LSC_PORTAL_API_URL";

/// Where the session tokens are kept between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    #[default]
    File,
    Keyring,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub session_backend: SessionBackend,
    pub last_lsc_number: Option<String>,
    #[serde(default)]
    pub log_to_file: bool,
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

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Backend URL: environment override, then config file, then the default
    pub fn api_base_url(&self) -> String {
        self.resolve_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Build the session store selected by `session_backend`
    pub fn session_store(&self) -> Result<Arc<dyn SessionStore>> {
        let store: Arc<dyn SessionStore> = match self.session_backend {
            SessionBackend::File => Arc::new(FileSessionStore::open(self.cache_dir()?)),
            SessionBackend::Keyring => Arc::new(KeyringSessionStore::default()),
            SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        };
        Ok(store)
    }
}
