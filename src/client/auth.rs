//! API key handling for the Spoonacular service.
//!
//! Spoonacular authenticates every request with an `apiKey` query parameter.
//! The key is injected through configuration and never compiled in; this
//! module keeps it out of logs.

use std::fmt;

/// # Spoonacular API key
///
/// Wraps the raw key so that `Debug` output and log lines only ever show a
/// short preview. Use [`ApiKey::as_str`] when the real value is needed on the
/// wire.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// First few characters followed by an ellipsis, safe to log.
    ///
    /// Keys of eight characters or fewer show no characters at all.
    pub fn preview(&self) -> String {
        if self.0.chars().count() <= 8 {
            return "...".to_string();
        }
        let head: String = self.0.chars().take(4).collect();
        format!("{}...", head)
    }

    /// Replaces every occurrence of the key in `text` with `[REDACTED]`.
    pub fn redact(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        let encoded = urlencoding::encode(&self.0);
        text.replace(encoded.as_ref(), "[REDACTED]")
            .replace(&self.0, "[REDACTED]")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}
