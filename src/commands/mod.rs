//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreError, score_guess};
pub use simple::run_simple;
