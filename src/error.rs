//! Error types for recipe searches and configuration loading.

use thiserror::Error;

/// Coarse failure category of a search.
///
/// Non-2xx statuses count as network failures: the request reached the
/// service but did not produce a usable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Decode => "decode",
        }
    }
}

/// Errors that can occur while searching for recipes.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or the body could not be read
    /// (DNS, connect, timeout, connection reset).
    #[error("Failed to reach recipe service: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Recipe service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON of the expected shape.
    #[error("Invalid response format from recipe service: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Network(_) | SearchError::Status { .. } => ErrorKind::Network,
            SearchError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Network(e) if e.is_timeout())
    }
}

/// Errors raised while loading configuration or building the HTTP client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
