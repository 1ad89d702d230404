//! Word providers: where target words come from
//!
//! A provider answers pattern queries where `?` stands for any single
//! letter. The session only ever asks for [`TARGET_PATTERN`], then picks one
//! of the returned words at random.

pub mod datamuse;
pub mod list;

pub use datamuse::DatamuseProvider;
pub use list::ListProvider;

use crate::core::Word;
use crate::error::{GameError, Unavailable};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use thiserror::Error;
use tracing::{debug, trace};

/// Pattern matching any five-letter word
pub const TARGET_PATTERN: &str = "?????";

/// Failure while talking to a word source
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("word service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("word fetch task failed: {0}")]
    TaskFailed(String),
}

/// Source of candidate words
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Short name for logs and status lines
    fn name(&self) -> &str;

    /// Fetch every word matching `pattern` (`?` = any single letter)
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` if the underlying source cannot be reached or read.
    async fn fetch_candidate_words(&self, pattern: &str) -> Result<Vec<String>, ProviderError>;
}

/// Check whether `word` fits a `?`-wildcard pattern, ignoring case
#[must_use]
pub fn matches_pattern(word: &str, pattern: &str) -> bool {
    word.chars().count() == pattern.chars().count()
        && word
            .chars()
            .zip(pattern.chars())
            .all(|(w, p)| p == '?' || w.eq_ignore_ascii_case(&p))
}

/// Fetch candidates from `provider` and pick a target uniformly at random
///
/// Entries that are not valid five-letter words (phrases, hyphenated
/// words, accented letters) are dropped before the draw.
///
/// # Errors
///
/// Returns `GameError::WordUnavailable` if the provider fails or no valid
/// candidate remains.
pub async fn draw_target<P>(provider: &P, pattern: &str) -> Result<Word, GameError>
where
    P: WordProvider + ?Sized,
{
    let raw = provider.fetch_candidate_words(pattern).await?;
    let raw_count = raw.len();

    let candidates: Vec<Word> = raw
        .into_iter()
        .filter(|w| matches_pattern(w, pattern))
        .filter_map(|w| Word::new(w).ok())
        .collect();

    debug!(
        provider = provider.name(),
        raw = raw_count,
        usable = candidates.len(),
        "fetched candidate words"
    );

    let target = candidates
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| Unavailable::NoCandidates {
            pattern: pattern.to_string(),
        })?;

    trace!(word = %target, "drew target word");
    Ok(target)
}
