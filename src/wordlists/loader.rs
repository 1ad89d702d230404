//! Reading word lists into validated `Word`s
//!
//! Lines that are not five-letter words are dropped rather than failing the
//! whole list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read a word file with one word per line
///
/// Surrounding whitespace and blank lines are ignored; malformed entries
/// are counted in the debug log and skipped.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// assert!(words.iter().all(|w| w.text().len() == 5));
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    debug!(
        path = %path.display(),
        loaded = words.len(),
        skipped,
        "loaded word file"
    );

    Ok(words)
}

/// Validate a list of strings, keeping only proper words
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
