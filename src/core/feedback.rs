//! Guess evaluation: per-letter feedback for a guess against the target
//!
//! Each position of a guess receives one of three states:
//! - Correct: letter is in the target at this position
//! - Present: letter is in the target, but not at this position
//! - Absent: letter is not in the target, or every occurrence of it has
//!   already been accounted for by other positions

use super::Word;
use super::word::WORD_LENGTH;
use std::fmt;

/// Feedback classification for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Square emoji for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess, one state per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Per-position states in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// State at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬛🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Word, evaluate};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// assert_eq!(evaluate(&target, &guess).to_emoji(), "⬛⬛🟩⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// Implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: Mark all exact matches and remove them from the target's letter pool
/// 2. Second pass: Mark present-but-misplaced letters while the pool still holds them
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterState, Word, evaluate};
///
/// let target = Word::new("speed").unwrap();
/// let guess = Word::new("erase").unwrap();
/// let feedback = evaluate(&target, &guess);
///
/// // Target has two E's, so both E's in the guess are present
/// assert_eq!(feedback.count(LetterState::Present), 3);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    let mut states = [LetterState::Absent; WORD_LENGTH];
    let mut target_available = target.letter_counts();

    // First pass: exact position matches
    // Allow: Index needed to access guess[i], target[i], and set states[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.letter(i) == target.letter(i) {
            states[i] = LetterState::Correct;

            if let Some(count) = target_available.get_mut(&guess.letter(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unclaimed occurrence exists
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if states[i] == LetterState::Correct {
            continue;
        }

        if let Some(count) = target_available.get_mut(&guess.letter(i))
            && *count > 0
        {
            states[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Feedback(states)
}

#[cfg(test)]
mod tests {
    use super::LetterState::{Absent, Correct, Present};
    use super::*;

    fn eval(target: &str, guess: &str) -> [LetterState; WORD_LENGTH] {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        *evaluate(&target, &guess).states()
    }

    #[test]
    fn evaluate_all_absent() {
        assert_eq!(eval("fghij", "abcde"), [Absent; 5]);
    }

    #[test]
    fn evaluate_exact_match_is_solved() {
        let word = Word::new("crane").unwrap();
        let feedback = evaluate(&word, &word);

        assert_eq!(feedback, Feedback::SOLVED);
        assert!(feedback.is_solved());
        assert_eq!(feedback.count(Correct), 5);
    }

    #[test]
    fn evaluate_real_wordle_example() {
        // CRANE against SLATE: A and E line up, nothing else is shared
        assert_eq!(
            eval("slate", "crane"),
            [Absent, Absent, Correct, Absent, Correct]
        );
    }

    #[test]
    fn evaluate_duplicates_capped_by_target_count() {
        // SPEED holds two E's; ERASE has two E's plus an S
        let states = eval("speed", "erase");
        assert_eq!(states, [Present, Absent, Absent, Present, Present]);
        assert_ne!(states, [Present; 5]);
    }

    #[test]
    fn evaluate_extra_duplicates_are_absent() {
        // EERIE has three E's, SPEED only two
        assert_eq!(
            eval("speed", "eerie"),
            [Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_correct_claims_before_present() {
        // The O at index 3 is correct; the earlier O only gets the leftover
        assert_eq!(
            eval("floor", "robot"),
            [Present, Present, Absent, Correct, Absent]
        );

        // Both L's of HELLO go to the exact matches, none left for the first L
        assert_eq!(
            eval("hello", "lolly"),
            [Absent, Present, Correct, Correct, Absent]
        );

        // A single L in the target: the first L takes it
        assert_eq!(
            eval("world", "llama"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn evaluate_leftover_duplicate_is_present() {
        // ABBEY has two B's: one exact match, one left for the trailing B
        assert_eq!(
            eval("abbey", "kebab"),
            [Absent, Present, Correct, Present, Present]
        );
    }

    /// Assert no letter gets more non-absent marks than the target holds
    fn assert_within_letter_counts(target: &Word, guess: &Word) {
        let feedback = evaluate(target, guess);
        let target_counts = target.letter_counts();

        for &letter in guess.letters() {
            let claimed = (0..WORD_LENGTH)
                .filter(|&i| guess.letter(i) == letter)
                .filter(|&i| feedback.state_at(i) != Absent)
                .count();
            let available = usize::from(target_counts.get(&letter).copied().unwrap_or(0));
            assert!(
                claimed <= available,
                "{guess} vs {target}: {claimed} marks for {} but only {available} in target",
                letter as char
            );
        }
    }

    #[test]
    fn evaluate_never_exceeds_target_letter_count() {
        let pairs = [
            ("speed", "erase"),
            ("speed", "eerie"),
            ("abbey", "kebab"),
            ("floor", "robot"),
            ("aaaab", "baaaa"),
            ("crane", "eeeee"),
        ];

        for (target, guess) in pairs {
            assert_within_letter_counts(&Word::new(target).unwrap(), &Word::new(guess).unwrap());
        }
    }

    #[test]
    fn evaluate_respects_letter_counts_across_word_list() {
        let words = crate::wordlists::loader::words_from_slice(crate::wordlists::WORDS);
        assert!(!words.is_empty());

        for target in &words {
            for guess in &words {
                assert_within_letter_counts(target, guess);
                assert_eq!(evaluate(target, guess).is_solved(), target == guess);
            }
        }
    }

    #[test]
    fn evaluate_same_letter_only_one_correct() {
        assert_eq!(
            eval("crane", "eeeee"),
            [Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        let target = Word::new("speed").unwrap();
        let guess = Word::new("erase").unwrap();
        assert_eq!(evaluate(&target, &guess).to_emoji(), "🟨⬛⬛🟨🟨");
        assert_eq!(Feedback::SOLVED.to_string(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn letter_state_ordering_ranks_correct_highest() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
