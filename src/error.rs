//! Error taxonomy for the game
//!
//! Every error is local to a single session and leaves it untouched, so the
//! caller can always recover: re-prompt, retry the word fetch, or reset.

use crate::core::WordError;
use crate::game::SessionOutcome;
use crate::provider::ProviderError;
use thiserror::Error;

/// Why a session has no target word to play against
#[derive(Debug, Error)]
pub enum Unavailable {
    #[error("no game has been started yet")]
    NotStarted,
    #[error("still fetching a word")]
    Loading,
    #[error("word source returned no usable words for pattern '{pattern}'")]
    NoCandidates { pattern: String },
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Errors surfaced by [`GameSession`](crate::game::GameSession)
#[derive(Debug, Error)]
pub enum GameError {
    /// Guess failed validation; nothing was recorded
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),

    /// No target word could be obtained (or it is still on its way)
    #[error("word unavailable: {0}")]
    WordUnavailable(#[from] Unavailable),

    /// Guess submitted after the game already ended
    #[error("game already {0}; start a new game first")]
    IllegalTransition(SessionOutcome),
}

impl GameError {
    /// Check if this error only asks the user to type something else
    #[must_use]
    pub const fn is_invalid_guess(&self) -> bool {
        matches!(self, Self::InvalidGuess(_))
    }
}

impl From<ProviderError> for GameError {
    fn from(err: ProviderError) -> Self {
        Self::WordUnavailable(Unavailable::Provider(err))
    }
}
