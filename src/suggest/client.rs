use reqwest::Url;
use thiserror::Error;

use crate::error::MandiError;
use crate::suggest::Suggestion;

/// Fetch failures, surfaced to the caller instead of panicking
///
/// The UI decides what to do with a failed fetch; the client only
/// classifies it.
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed suggestion payload: {0}")]
    Decode(String),
}

/// HTTP client for the marketplace suggest endpoint
pub struct SuggestClient {
    http: reqwest::Client,
    suggest_url: Url,
}

impl SuggestClient {
    /// Create a client for the given server base URL
    ///
    /// # Arguments
    /// * `base_url` - Server root, e.g. `http://127.0.0.1:5000`
    ///
    /// # Returns
    /// * `Err(MandiError::InvalidServerUrl)` - If the base URL does not parse
    pub fn new(base_url: &str) -> Result<Self, MandiError> {
        let mut base: Url = base_url
            .parse()
            .map_err(|e| MandiError::InvalidServerUrl(format!("{base_url}: {e}")))?;

        // Url::join drops the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let suggest_url = base
            .join("api/suggest")
            .map_err(|e| MandiError::InvalidServerUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            http: reqwest::Client::new(),
            suggest_url,
        })
    }

    /// The fully-qualified suggest endpoint URL (without query string)
    pub fn suggest_url(&self) -> &Url {
        &self.suggest_url
    }

    /// Build the request URL for a query, with `q` URL-encoded
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.suggest_url.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    /// Fetch suggestions for a query
    ///
    /// # Arguments
    /// * `query` - Trimmed, non-empty search text
    ///
    /// # Returns
    /// * `Ok(Vec<Suggestion>)` - Parsed suggestion list, possibly empty
    /// * `Err(SuggestError)` - Transport failure, non-2xx status, or bad body
    pub async fn fetch(&self, query: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let response = self
            .http
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| SuggestError::Decode(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
