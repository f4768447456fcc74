//! Assistant configuration: model selection and credential resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Env var holding the xAI API key when no config file provides one.
pub const ENV_XAI_API_KEY: &str = "XAI_API_KEY";

/// Complete assistant configuration.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API keys for completion providers.
    pub api_keys: ApiKeys,
    /// Model configuration.
    pub model: ModelConfig,
}

/// API keys for completion providers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeys {
    /// xAI API key. Absence is a supported state: the assistant degrades to
    /// canned fallback replies instead of failing.
    pub xai_api_key: Option<String>,
}

/// Model configuration for the completion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model identifier sent with every request.
    pub name: String,
    /// Base URL of the chat-completion API.
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "grok-code-fast-1".to_owned(),
            base_url: "https://api.x.ai/v1".to_owned(),
        }
    }
}

impl Config {
    /// Get the default config directory path (`~/.quill`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("could not determine home directory".to_owned()))?;
        Ok(home.join(".quill"))
    }

    /// Get the default config file path (`~/.quill/config.toml`)
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load config from the default location (`~/.quill/config.toml`).
    /// If the config doesn't exist, creates it with default values.
    ///
    /// # Errors
    /// Returns an error if the config cannot be read or created
    pub fn load_or_create() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    /// Load config from a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|error| Error::Config(format!("failed to read config: {error}")))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|error| Error::Config(format!("failed to parse config: {error}")))?;

        tracing::debug!(
            "Loaded config from {:?}: xai_api_key={}",
            path,
            if config.api_keys.xai_api_key.is_some() {
                "present"
            } else {
                "missing"
            }
        );

        Ok(config)
    }

    /// Save config to a specific file
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                Error::Config(format!("failed to create config directory: {error}"))
            })?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|error| Error::Config(format!("failed to serialize config: {error}")))?;

        let header = "# Quill Configuration File\n\
                      # This file is automatically generated on first run\n\
                      # Edit this file to customize your settings\n\n";

        fs::write(path, format!("{header}{contents}"))
            .map_err(|error| Error::Config(format!("failed to write config: {error}")))?;

        Ok(())
    }

    /// Get the xAI API key, checking the config file first, then the
    /// `XAI_API_KEY` environment variable.
    ///
    /// Returns `None` when neither source provides a key; callers treat that
    /// as the fallback configuration state, not an error.
    pub fn api_key(&self) -> Option<String> {
        self.api_keys
            .xai_api_key
            .clone()
            .or_else(|| env::var(ENV_XAI_API_KEY).ok())
    }
}
