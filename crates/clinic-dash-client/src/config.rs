//! Client configuration.
//!
//! Loaded from an optional config file, then overridden by environment
//! variables prefixed `CLINIC_DASH_` (e.g. `CLINIC_DASH_BASE_URL`).

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8080`
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// SQLite file holding the persisted session
    pub token_store_path: PathBuf,
    pub default_page_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            token_store_path: PathBuf::from("clinic-dash-session.db"),
            default_page_size: 10,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check the base URL and strip any trailing slash.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: trimmed.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: trimmed,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.base_url = trimmed;
        Ok(self)
    }
}

/// Load configuration from `path` (if given) and the environment.
pub fn load_config(path: Option<&str>) -> Result<ClientConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::with_name(path).required(false));
    }
    let config: ClientConfig = builder
        .add_source(Environment::with_prefix("CLINIC_DASH"))
        .build()?
        .try_deserialize()?;
    config.validate()
}
