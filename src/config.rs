//! Configuration handling for the form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Endpoint used when neither the environment nor the config file sets one
pub const DEFAULT_ENDPOINT: &str = "https://any.endpoint.com";

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "SIGNUP_FORM_ENDPOINT";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Endpoint the form is posted to
    pub endpoint: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, writing a starter file on first run
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_init_at(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
        };
        config.save_to(path)?;
        info!(path = %path.display(), "wrote default config");
        Ok(config)
    }

    /// Save configuration to file
    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint to post to: environment, then file, then the default
    pub fn endpoint(&self) -> String {
        self.endpoint_with_override(std::env::var(ENDPOINT_ENV).ok())
    }

    fn endpoint_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}
