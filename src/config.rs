//! Centralized configuration management for pollgrid

use anyhow::{Context, Result};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the poll service
    pub endpoint: String,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "pollgrid/0.1.0".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var("POLLGRID_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let http = HttpConfig {
            timeout_seconds: parse_env_var("POLLGRID_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("POLLGRID_USER_AGENT")
                .unwrap_or_else(|_| "pollgrid/0.1.0".to_string()),
        };

        Ok(Config { endpoint, http })
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "Endpoint must be an http(s) URL: {}",
                self.endpoint
            ));
        }
        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.http.timeout_seconds, 30);
        assert_eq!(config.http.user_agent, "pollgrid/0.1.0");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_env().unwrap();
        config.validate().unwrap();

        config.endpoint = "ftp://polls.example.com".to_string();
        assert!(config.validate().is_err());
    }
}
