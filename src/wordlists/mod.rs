//! Word lists for offline play
//!
//! Provides the embedded word list compiled into the binary, plus a loader
//! for user-supplied word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
