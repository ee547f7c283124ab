//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Production host of the card-management API.
pub const EXTEND_URL_BASE: &str = "https://api.paywithextend.com";

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_HOST` (optional): bind address, defaults to 0.0.0.0
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
/// - `UPSTREAM_BASE_URL` (optional): card API scheme and host, defaults to [`EXTEND_URL_BASE`]
/// - `UPSTREAM_TIMEOUT_SECS` (optional): outbound request timeout, defaults to 15
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub server_host: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_upstream_base_url")]
    pub upstream_base_url: String,

    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),

    #[error("UPSTREAM_BASE_URL is not a valid http(s) URL: {0}")]
    UpstreamBaseUrl(String),
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_upstream_base_url() -> String {
    EXTEND_URL_BASE.to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    15
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
            upstream_base_url: default_upstream_base_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed into its expected type,
    /// or if `UPSTREAM_BASE_URL` is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()?;
        config.upstream_base()?;
        Ok(config)
    }

    /// Parsed upstream base URL.
    pub fn upstream_base(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.upstream_base_url)
            .map_err(|e| ConfigError::UpstreamBaseUrl(format!("{}: {}", self.upstream_base_url, e)))?;

        if matches!(url.scheme(), "https" | "http") && url.has_host() {
            Ok(url)
        } else {
            Err(ConfigError::UpstreamBaseUrl(self.upstream_base_url.clone()))
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Socket address string the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_production_host() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.upstream_timeout(), Duration::from_secs(15));
        assert_eq!(
            config.upstream_base().unwrap().as_str(),
            "https://api.paywithextend.com/"
        );
    }

    #[test]
    fn rejects_non_http_upstream() {
        let config = Config {
            upstream_base_url: "ftp://api.paywithextend.com".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.upstream_base(),
            Err(ConfigError::UpstreamBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_relative_upstream() {
        let config = Config {
            upstream_base_url: "api.paywithextend.com".to_string(),
            ..Config::default()
        };
        assert!(config.upstream_base().is_err());
    }
}
