//! Configuration management for teamctl

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::models::TeamRole;
use crate::error::{ConfigError, Result};

/// Application configuration, stored at `~/.teamctl/config.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Signed-in user's platform ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Signed-in user's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The user's team role, as reported at sign-in
    #[serde(default)]
    pub role: TeamRole,

    /// Bearer token issued by the platform's auth provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Platform host override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".teamctl").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => Self::load_from(Self::default_path()?),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        match path {
            Some(p) => self.save_to(Path::new(p)),
            None => self.save_to(&Self::default_path()?),
        }
    }

    /// Save configuration to a specific path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let contents = serde_yaml::to_string(self).map_err(ConfigError::from)?;
        std::fs::write(path, contents).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Ensure the config carries everything a signed-in command needs.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.is_none() {
            return Err(ConfigError::MissingToken.into());
        }
        if self.user_id.is_none() || self.username.is_none() {
            return Err(ConfigError::MissingUser.into());
        }
        Ok(())
    }
}
