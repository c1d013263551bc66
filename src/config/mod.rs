//! Configuration management for Browsr

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API host override (defaults to the public GitHub API)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Personal access token, sent as a bearer header when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".browsr").join("config.yaml"))
    }

    /// Resolve the config path, honoring an override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring a path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring a path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = Self::resolve_path(path)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Load configuration, falling back to defaults when no file exists yet
    pub fn load_or_default(path: Option<&str>) -> Self {
        match Self::load_at(path) {
            Ok(config) => config,
            Err(err) => {
                log::debug!("Using default configuration: {}", err);
                Config::default()
            }
        }
    }
}
