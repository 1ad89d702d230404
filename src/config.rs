//! Runtime configuration
//!
//! Built from command line flags in `main.rs`; shared by both front ends.

use crate::provider::datamuse::DEFAULT_API_URL;
use crate::provider::{DatamuseProvider, ListProvider, ProviderError, WordProvider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Default pause between revealing consecutive tiles
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(150);

/// Where target words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Online word service
    Remote,
    /// Word list compiled into the binary
    Embedded,
    /// Word file on disk, one word per line
    File(PathBuf),
}

impl WordSource {
    /// Interpret a `-w` argument
    ///
    /// - "remote": query the word service (default)
    /// - "embedded": use the built-in list, no network
    /// - anything else: path to a word file
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "remote" => Self::Remote,
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub source: WordSource,
    pub api_url: String,
    /// Post-evaluation delay between tiles; zero disables the animation
    pub reveal_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            source: WordSource::Remote,
            api_url: DEFAULT_API_URL.to_string(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new(source: WordSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    /// Build the word provider this configuration asks for
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the HTTP client cannot be created or the
    /// word file cannot be read.
    pub fn provider(&self) -> Result<Arc<dyn WordProvider>, ProviderError> {
        let provider: Arc<dyn WordProvider> = match &self.source {
            WordSource::Remote => Arc::new(DatamuseProvider::new(self.api_url.clone())?),
            WordSource::Embedded => Arc::new(ListProvider::embedded()),
            WordSource::File(path) => Arc::new(ListProvider::from_file(path)?),
        };
        Ok(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_source_from_arg() {
        assert_eq!(WordSource::from_arg("remote"), WordSource::Remote);
        assert_eq!(WordSource::from_arg("embedded"), WordSource::Embedded);
        assert_eq!(
            WordSource::from_arg("data/words.txt"),
            WordSource::File(PathBuf::from("data/words.txt"))
        );
    }

    #[test]
    fn default_config_uses_word_service() {
        let config = GameConfig::default();
        assert_eq!(config.source, WordSource::Remote);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.reveal_delay, DEFAULT_REVEAL_DELAY);
    }

    #[test]
    fn provider_matches_source() {
        let embedded = GameConfig::new(WordSource::Embedded).provider().unwrap();
        assert_eq!(embedded.name(), "embedded");

        let remote = GameConfig::default().provider().unwrap();
        assert_eq!(remote.name(), "datamuse");
    }

    #[test]
    fn provider_reports_unreadable_file() {
        let config = GameConfig::new(WordSource::File(PathBuf::from("/nonexistent/words.txt")));
        assert!(matches!(config.provider(), Err(ProviderError::Io(_))));
    }
}
