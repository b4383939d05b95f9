//! Application configuration
//!
//! Configuration loaded from `.blog-shelf.toml`, with the API URL
//! overridable from the environment (or a `.env` file).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Environment variable holding the collection URL
pub const API_URL_ENV: &str = "MOCKAPI_URL";

/// Application configuration loaded from .blog-shelf.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Collection URL, e.g. `https://<project>.mockapi.io/api/v1/blogs`
    #[serde(default)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from file (CWD, config dir, home) and apply the
    /// environment override, or use defaults
    pub fn load() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        let config = Self::from_file().unwrap_or_else(|| {
            log::debug!("Using default app config");
            Self::default()
        });

        config.with_api_url_override(env::var(API_URL_ENV).ok())
    }

    fn from_file() -> Option<Self> {
        let content = crate::load_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    }

    /// Replace `api_url` when a non-blank override is given
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()) {
            if !url.is_empty() {
                log::debug!("Using API URL from {}", API_URL_ENV);
                self.api_url = url;
            }
        }
        self
    }

    /// The configured API URL, or an error explaining how to set one
    pub fn api_url(&self) -> Result<&str> {
        let url = self.api_url.trim();
        if url.is_empty() {
            bail!(
                "No API URL configured: set {} or `api_url` in .blog-shelf.toml",
                API_URL_ENV
            );
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_url.is_empty());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.api_url().is_err());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_url = "https://example.mockapi.io/api/v1/blogs"
            request_timeout_secs = 5
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.api_url().unwrap(),
            "https://example.mockapi.io/api/v1/blogs"
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            api_url = "https://example.mockapi.io/blogs"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        // Timeout should use default
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_env_override_replaces_file_value() {
        let config = AppConfig {
            api_url: "https://file.example/blogs".to_string(),
            ..AppConfig::default()
        }
        .with_api_url_override(Some(" https://env.example/blogs ".to_string()));
        assert_eq!(config.api_url().unwrap(), "https://env.example/blogs");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = AppConfig {
            api_url: "https://file.example/blogs".to_string(),
            ..AppConfig::default()
        }
        .with_api_url_override(Some("   ".to_string()))
        .with_api_url_override(None);
        assert_eq!(config.api_url().unwrap(), "https://file.example/blogs");
    }
}
