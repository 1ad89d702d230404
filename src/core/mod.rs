//! Core domain types for Wordle
//!
//! This module contains the word type and the guess evaluator.
//! Everything here is pure and has no I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState, evaluate};
pub use word::{WORD_LENGTH, Word, WordError};
