//! `/api/search` client.

use std::fmt;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::suggest::RequestTag;
use crate::types::SuggestionResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Transport failure: DNS, refused connection, aborted fetch.
    Network(String),
    /// Non-2xx response.
    Status(u16),
    /// Body was not a JSON array of suggestions.
    Decode(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Status(code) => write!(f, "search endpoint returned HTTP {code}"),
            Self::Decode(e) => write!(f, "malformed search response: {e}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Anything that can answer a suggestion query.
#[allow(async_fn_in_trait)]
pub trait SearchBackend {
    async fn search(&self, query: &str) -> Result<Vec<SuggestionResult>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
}

impl HttpSearchClient {
    /// `base` is an origin such as `https://blog.example.com`; `path` is the
    /// endpoint path (`/api/search`).
    pub fn new(base: &str, path: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base.trim_end_matches('/'), path),
        }
    }

    /// Build from config, falling back to `origin` when `api_base` is empty.
    pub fn from_config(config: &SiteConfig, origin: &str) -> Self {
        let base = if config.api_base.is_empty() { origin } else { config.api_base.as_str() };
        Self::new(base, &config.search_path)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SuggestionResult>, SearchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        // Read the body first so a dropped connection is reported as a network error.
        let body = response.bytes().await.map_err(|e| SearchError::Network(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

/// Issue the request for `tag` and log failures. The result goes straight into
/// `SuggestionController::on_response`.
pub async fn dispatch<B: SearchBackend>(
    backend: &B,
    tag: RequestTag,
) -> (RequestTag, Result<Vec<SuggestionResult>, SearchError>) {
    let result = backend.search(tag.query()).await;
    match &result {
        Ok(results) => debug!(seq = tag.seq(), count = results.len(), "Suggestions received"),
        Err(e) => warn!(seq = tag.seq(), query = tag.query(), error = %e, "Search error"),
    }
    (tag, result)
}
