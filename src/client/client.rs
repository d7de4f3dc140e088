use std::time::Duration;

use reqwest::Client;

use crate::client::{auth::ApiKey, types::*};
use crate::error::{ConfigError, SearchError};

const SEARCH_PATH: &str = "recipes/complexSearch";
/// Longest error body kept from a non-success response, in characters.
const MAX_ERROR_BODY_CHARS: usize = 512;

pub struct SpoonacularClient {
    base_url: String,
    client: Client,
    api_key: ApiKey,
}

impl SpoonacularClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key_preview(&self) -> String {
        self.api_key.preview()
    }

    /// Full request URL for `criteria`, including the API key.
    pub fn search_url(&self, criteria: &SearchCriteria) -> String {
        let mut params: Vec<String> = criteria
            .query_params()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(&value)))
            .collect();
        params.push(format!("apiKey={}", urlencoding::encode(self.api_key.as_str())));

        format!("{}/{}?{}", self.base_url, SEARCH_PATH, params.join("&"))
    }

    /// Issues exactly one GET and returns the results in server order.
    pub async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        let url = self.search_url(criteria);
        tracing::debug!("Making search request to: {}", self.api_key.redact(&url));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    "Network error searching recipes: {}",
                    self.api_key.redact(&e.to_string())
                );
                SearchError::Network(e.without_url())
            })?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            let error_body =
                truncate_chars(&self.api_key.redact(&error_body), MAX_ERROR_BODY_CHARS);
            tracing::error!("Search failed with status {}: {}", status, error_body);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.without_url()))?;
        tracing::debug!("Search response body: {} bytes", body.len());

        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse search response: {}", e);
            SearchError::Decode(e)
        })?;

        tracing::debug!(
            "Successfully retrieved {} recipes (server reports {} total)",
            parsed.results.len(),
            parsed.total_results.map_or_else(|| "?".to_string(), |n| n.to_string())
        );
        Ok(parsed.results)
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}... [truncated]", &text[..cut]),
        None => text.to_string(),
    }
}
