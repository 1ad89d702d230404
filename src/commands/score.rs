//! Score command
//!
//! Evaluates a single guess against a chosen target, without a session.

use crate::core::{Word, WordError, evaluate};
use crate::game::EvaluatedGuess;
use thiserror::Error;

/// Which argument of `score` was malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid target: {0}")]
    InvalidTarget(WordError),
    #[error("invalid guess: {0}")]
    InvalidGuess(WordError),
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns `ScoreError` naming the argument that is not a five-letter word.
/// The target is checked first.
pub fn score_guess(target: &str, guess: &str) -> Result<EvaluatedGuess, ScoreError> {
    let target = Word::new(target).map_err(ScoreError::InvalidTarget)?;
    let guess = Word::new(guess).map_err(ScoreError::InvalidGuess)?;
    let feedback = evaluate(&target, &guess);

    Ok(EvaluatedGuess { guess, feedback })
}
