//! In-memory word source
//!
//! Serves pattern queries from a fixed list: the embedded word list or a
//! user-supplied word file. Works offline.

use super::{ProviderError, WordProvider, matches_pattern};
use crate::core::Word;
use crate::wordlists::WORDS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use async_trait::async_trait;
use std::path::Path;

/// Word provider over a fixed list of words
pub struct ListProvider {
    name: String,
    words: Vec<Word>,
}

impl ListProvider {
    /// Create a provider over the given words
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<Word>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Provider over the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new("embedded", words_from_slice(WORDS))
    }

    /// Provider over a word file, one word per line
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let words = load_from_file(path)?;
        Ok(Self::new(path.display().to_string(), words))
    }

    /// Number of words available
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[async_trait]
impl WordProvider for ListProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_candidate_words(&self, pattern: &str) -> Result<Vec<String>, ProviderError> {
        Ok(self
            .words
            .iter()
            .filter(|w| matches_pattern(w.text(), pattern))
            .map(|w| w.text().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::TARGET_PATTERN;

    fn provider(words: &[&str]) -> ListProvider {
        ListProvider::new("test", words_from_slice(words))
    }

    #[tokio::test]
    async fn fetch_applies_pattern() {
        let provider = provider(&["crane", "crate", "slate", "irate"]);

        let all = provider.fetch_candidate_words(TARGET_PATTERN).await.unwrap();
        assert_eq!(all.len(), 4);

        let cr = provider.fetch_candidate_words("cr???").await.unwrap();
        assert_eq!(cr, vec!["CRANE", "CRATE"]);

        let none = provider.fetch_candidate_words("????").await.unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn embedded_list_is_not_empty() {
        let provider = ListProvider::embedded();
        assert!(!provider.is_empty());
        assert_eq!(provider.len(), WORDS.len());
        assert_eq!(provider.name(), "embedded");
    }

    #[test]
    fn from_file_reports_missing_file() {
        let result = ListProvider::from_file("/nonexistent/words.txt");
        assert!(matches!(result, Err(ProviderError::Io(_))));
    }

    #[tokio::test]
    async fn from_file_loads_words() {
        let path = std::env::temp_dir().join(format!("wordle_game_list_{}.txt", std::process::id()));
        std::fs::write(&path, "crane\n\nslate\nnot a word\n").unwrap();

        let provider = ListProvider::from_file(&path).unwrap();
        let words = provider.fetch_candidate_words(TARGET_PATTERN).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }
}
