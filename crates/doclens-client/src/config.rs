use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backend URL used when nothing else is configured (local dev default).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Config file location:
    /// 1. XDG config directory (recommended default)
    /// 2. ~/.doclens (fallback for systems without XDG)
    pub fn default_path() -> Result<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join("doclens").join("config.toml"));
        }

        if let Some(home) = std::env::var_os("HOME") {
            return Ok(PathBuf::from(home).join(".doclens").join("config.toml"));
        }

        Err(Error::Config(
            "Could not determine config path: no HOME directory or XDG config directory found"
                .to_string(),
        ))
    }
}

/// Resolve the backend base URL based on priority:
/// 1. Explicit flag
/// 2. DOCLENS_BACKEND_URL environment variable
/// 3. Config file
/// 4. Local default
pub fn resolve_backend_url(explicit: Option<&str>, config: &Config) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Ok(url) = std::env::var("DOCLENS_BACKEND_URL") {
        return url;
    }

    config
        .backend_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}
