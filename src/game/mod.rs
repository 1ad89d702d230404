//! Game progression: sessions and their running statistics

mod session;
mod stats;

pub use session::{EvaluatedGuess, GameSession, MAX_TURNS, SessionOutcome};
pub use stats::Statistics;
