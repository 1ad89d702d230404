//! Game session state machine
//!
//! A session owns one target word and the guesses made against it.
//!
//! ```text
//!  Uninitialized ──begin_reset──▶ AwaitingWord ──install_target(Ok)──▶ InProgress
//!        ▲                            │                                  │  submit_guess
//!        └──────install_target(Err)───┘                                  ▼
//!                                                                   Won / Lost
//! ```
//!
//! `reset` is available from every phase and is the only way out of a
//! finished game. A rejected guess leaves the session exactly as it was.

use crate::core::{Feedback, LetterState, Word, evaluate};
use crate::error::{GameError, Unavailable};
use crate::provider::{TARGET_PATTERN, WordProvider, draw_target};
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::{debug, info, trace, warn};

/// Maximum number of guesses per game
pub const MAX_TURNS: usize = 6;

/// Outcome of a session that has a target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionOutcome {
    InProgress,
    Won,
    Lost,
}

impl SessionOutcome {
    /// Check if no further guesses are accepted
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A recorded guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    pub guess: Word,
    pub feedback: Feedback,
}

impl EvaluatedGuess {
    /// Iterate letters paired with their states, in guess order
    pub fn letters(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.guess
            .letters()
            .iter()
            .zip(self.feedback.states())
            .map(|(&ch, &state)| (ch as char, state))
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Uninitialized,
    AwaitingWord,
    Active {
        target: Word,
        outcome: SessionOutcome,
    },
}

/// One game of Wordle
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    history: Vec<EvaluatedGuess>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Create a session with no target word yet
    ///
    /// Call [`reset`](Self::reset) to draw a word before playing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: Phase::Uninitialized,
            history: Vec::new(),
        }
    }

    /// Create a session already playing against `target`
    #[must_use]
    pub const fn with_target(target: Word) -> Self {
        Self {
            phase: Phase::Active {
                target,
                outcome: SessionOutcome::InProgress,
            },
            history: Vec::new(),
        }
    }

    /// Start a fresh game with a word drawn from `provider`
    ///
    /// # Errors
    ///
    /// Returns `GameError::WordUnavailable` if no word could be drawn; the
    /// session is then uninitialized until a later reset succeeds.
    pub async fn reset<P>(&mut self, provider: &P) -> Result<(), GameError>
    where
        P: WordProvider + ?Sized,
    {
        self.begin_reset();
        let drawn = draw_target(provider, TARGET_PATTERN).await;
        self.install_target(drawn)
    }

    /// Discard the current game and wait for a new target word
    ///
    /// Guesses submitted until [`install_target`](Self::install_target) is
    /// called fail with `WordUnavailable`.
    pub fn begin_reset(&mut self) {
        debug!(discarded = self.history.len(), "resetting session");
        self.history.clear();
        self.phase = Phase::AwaitingWord;
    }

    /// Finish a reset with the outcome of a word draw
    ///
    /// # Errors
    ///
    /// Passes the draw error through after moving to the uninitialized phase.
    pub fn install_target(&mut self, drawn: Result<Word, GameError>) -> Result<(), GameError> {
        self.history.clear();
        match drawn {
            Ok(target) => {
                trace!(word = %target, "target installed");
                info!("new game started");
                self.phase = Phase::Active {
                    target,
                    outcome: SessionOutcome::InProgress,
                };
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "could not start a new game");
                self.phase = Phase::Uninitialized;
                Err(err)
            }
        }
    }

    /// Submit a guess for the current turn
    ///
    /// The guess is normalized to uppercase, evaluated, and appended to the
    /// history. Matching the target wins the game; using the last turn
    /// without a match loses it.
    ///
    /// # Errors
    ///
    /// - `WordUnavailable` if there is no target word yet
    /// - `IllegalTransition` if the game is already won or lost
    /// - `InvalidGuess` if the input is not exactly five letters
    pub fn submit_guess(&mut self, input: &str) -> Result<&EvaluatedGuess, GameError> {
        let (target, outcome) = match &mut self.phase {
            Phase::Uninitialized => return Err(Unavailable::NotStarted.into()),
            Phase::AwaitingWord => return Err(Unavailable::Loading.into()),
            Phase::Active { target, outcome } => (target, outcome),
        };

        if outcome.is_terminal() {
            return Err(GameError::IllegalTransition(*outcome));
        }

        let guess = Word::new(input)?;
        let feedback = evaluate(target, &guess);

        debug!(
            turn = self.history.len() + 1,
            guess = %guess,
            feedback = %feedback,
            "guess evaluated"
        );

        let solved = guess == *target;
        self.history.push(EvaluatedGuess { guess, feedback });

        if solved {
            *outcome = SessionOutcome::Won;
            info!(turns = self.history.len(), "game won");
        } else if self.history.len() >= MAX_TURNS {
            *outcome = SessionOutcome::Lost;
            info!(word = %target, "game lost");
        }

        let recorded = self.history.len() - 1;
        Ok(&self.history[recorded])
    }

    /// Guesses made so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[EvaluatedGuess] {
        &self.history
    }

    /// Outcome of the current game, or `None` while there is no target word
    #[must_use]
    pub const fn outcome(&self) -> Option<SessionOutcome> {
        match &self.phase {
            Phase::Active { outcome, .. } => Some(*outcome),
            Phase::Uninitialized | Phase::AwaitingWord => None,
        }
    }

    /// Check if the session is waiting on a word draw
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::AwaitingWord)
    }

    /// Check if a guess would currently be accepted
    #[must_use]
    pub const fn is_accepting(&self) -> bool {
        matches!(self.outcome(), Some(SessionOutcome::InProgress))
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn turns_taken(&self) -> usize {
        self.history.len()
    }

    /// Guesses still available in this game
    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        if self.is_accepting() {
            MAX_TURNS - self.history.len()
        } else {
            0
        }
    }

    /// The target word, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        match &self.phase {
            Phase::Active { target, outcome } if outcome.is_terminal() => Some(target),
            _ => None,
        }
    }

    /// Best state each guessed letter has reached so far
    ///
    /// Used to shade the on-screen keyboard.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, LetterState> {
        self.letter_hints_through(self.history.len())
    }

    /// Like [`letter_hints`](Self::letter_hints), but only counting the
    /// first `turns` guesses
    #[must_use]
    pub fn letter_hints_through(&self, turns: usize) -> FxHashMap<char, LetterState> {
        let mut hints: FxHashMap<char, LetterState> = FxHashMap::default();
        let counted = &self.history[..turns.min(self.history.len())];
        for (letter, state) in counted.iter().flat_map(EvaluatedGuess::letters) {
            hints
                .entry(letter)
                .and_modify(|best| *best = (*best).max(state))
                .or_insert(state);
        }
        hints
    }
}
