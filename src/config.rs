//! Runtime configuration, read from environment variables.

use std::env;
use std::time::Duration;

use crate::client::ApiKey;
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

/// Settings for the search client and the MCP server.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Root of the Spoonacular API
    pub base_url: String,
    /// Key attached to every request as `apiKey`
    pub api_key: ApiKey,
    /// Per-request timeout
    pub timeout: Duration,
    /// Listen address of the SSE server
    pub bind_addr: String,
}

impl FinderConfig {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `SPOONACULAR_API_KEY`, `SPOONACULAR_BASE_URL`,
    /// `SPOONACULAR_TIMEOUT_SECS` and `BIND_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("SPOONACULAR_API_KEY")
            .map(ApiKey::new)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing("SPOONACULAR_API_KEY"))?;

        let base_url = lookup("SPOONACULAR_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                name: "SPOONACULAR_BASE_URL",
                reason: format!("expected an http(s) URL, got '{}'", base_url),
            });
        }

        let timeout = match lookup("SPOONACULAR_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "SPOONACULAR_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got '{}'", raw),
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            base_url,
            api_key,
            timeout,
            bind_addr,
        })
    }
}
