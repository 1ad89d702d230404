//! Remote word source backed by the Datamuse API
//!
//! `GET {base}?sp=?????&max=N` returns a JSON array of
//! `{"word": "...", "score": n}` objects spelled like the pattern.

use super::{ProviderError, WordProvider};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public Datamuse endpoint
pub const DEFAULT_API_URL: &str = "https://api.datamuse.com/words";

/// Maximum number of results Datamuse will return for one query
const MAX_RESULTS: u32 = 1000;

/// Upper bound on a single request so a stalled fetch surfaces as an error
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One entry of a Datamuse response
#[derive(Debug, Deserialize)]
pub struct DatamuseEntry {
    pub word: String,
}

/// Word provider querying the Datamuse spelled-like endpoint
pub struct DatamuseProvider {
    /// Endpoint URL, without query string
    api_url: String,

    /// HTTP client
    http_client: reqwest::Client,
}

impl DatamuseProvider {
    /// Create a provider for the given endpoint
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            api_url: api_url.into(),
            http_client,
        })
    }

    /// Endpoint this provider queries
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

/// Extract the words from a decoded response
#[must_use]
pub fn words_from_entries(entries: Vec<DatamuseEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.word).collect()
}

#[async_trait]
impl WordProvider for DatamuseProvider {
    fn name(&self) -> &str {
        "datamuse"
    }

    async fn fetch_candidate_words(&self, pattern: &str) -> Result<Vec<String>, ProviderError> {
        debug!(url = %self.api_url, pattern, "querying word service");

        let max = MAX_RESULTS.to_string();
        let entries: Vec<DatamuseEntry> = self
            .http_client
            .get(&self.api_url)
            .query(&[("sp", pattern), ("max", max.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(words_from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_datamuse_response() {
        let body = r#"[
            {"word": "about", "score": 41302},
            {"word": "other", "score": 38712},
            {"word": "a bit", "score": 1200}
        ]"#;

        let entries: Vec<DatamuseEntry> = serde_json::from_str(body).unwrap();
        let words = words_from_entries(entries);

        assert_eq!(words, vec!["about", "other", "a bit"]);
    }

    #[test]
    fn parses_empty_response() {
        let entries: Vec<DatamuseEntry> = serde_json::from_str("[]").unwrap();
        assert!(words_from_entries(entries).is_empty());
    }

    #[test]
    fn entries_without_score_are_accepted() {
        let entries: Vec<DatamuseEntry> = serde_json::from_str(r#"[{"word": "crane"}]"#).unwrap();
        assert_eq!(words_from_entries(entries), vec!["crane"]);
    }

    #[test]
    fn provider_keeps_configured_url() {
        let provider = DatamuseProvider::new("http://localhost:9/words").unwrap();
        assert_eq!(provider.api_url(), "http://localhost:9/words");
        assert_eq!(provider.name(), "datamuse");
    }
}
