//! Validated five-letter words
//!
//! Targets and guesses share one type, so anything that reaches the
//! evaluator has already passed length and alphabet checks. Letters are
//! stored as uppercase ASCII bytes.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A five-letter word in uppercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Why a string was rejected as a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("only the letters A-Z are allowed")]
    NonAscii,
    #[error("digits, spaces and punctuation are not allowed")]
    InvalidCharacters,
}

impl Word {
    /// Validate `input` and normalize it to uppercase
    ///
    /// Length is counted in characters, so accented input reports its real
    /// length before being rejected as non-ASCII.
    ///
    /// # Errors
    ///
    /// - `InvalidLength` unless the input has exactly five characters
    /// - `NonAscii` for letters outside A-Z
    /// - `InvalidCharacters` for digits, whitespace or punctuation
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("Crane").unwrap().text(), "CRANE");
    /// assert_eq!(Word::new("AB"), Err(WordError::InvalidLength(2)));
    /// assert_eq!(Word::new("x-ray"), Err(WordError::InvalidCharacters));
    /// ```
    pub fn new(input: impl AsRef<str>) -> Result<Self, WordError> {
        let input = input.as_ref();

        let length = input.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }
        if !input.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(input.bytes()) {
            if !byte.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self {
            text: input.to_ascii_uppercase(),
            letters,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in order, as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position`; panics past the last letter
    #[inline]
    #[must_use]
    pub const fn letter(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Occurrences of each letter
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        self.letters
            .iter()
            .fold(FxHashMap::default(), |mut counts, &letter| {
                *counts.entry(letter).or_default() += 1;
                counts
            })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
