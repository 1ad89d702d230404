//! Running tally of finished games

use super::session::{MAX_TURNS, SessionOutcome};

/// Win/loss statistics for the games played in this process
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_TURNS + 1],
}

impl Statistics {
    /// Record a finished game
    ///
    /// Games still in progress are ignored.
    pub fn record(&mut self, outcome: SessionOutcome, turns: usize) {
        match outcome {
            SessionOutcome::InProgress => return,
            SessionOutcome::Won => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if let Some(slot) = self.guess_distribution.get_mut(turns) {
                    *slot += 1;
                }
            }
            SessionOutcome::Lost => self.current_streak = 0,
        }
        self.total_games += 1;
    }

    /// Percentage of games won (0-100)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Largest bucket of the guess distribution, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.max_bucket(), 0);
    }

    #[test]
    fn record_tracks_wins_and_distribution() {
        let mut stats = Statistics::default();
        stats.record(SessionOutcome::Won, 3);
        stats.record(SessionOutcome::Won, 3);
        stats.record(SessionOutcome::Won, 6);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.guess_distribution[3], 2);
        assert_eq!(stats.guess_distribution[6], 1);
        assert_eq!(stats.max_bucket(), 2);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let mut stats = Statistics::default();
        stats.record(SessionOutcome::Won, 2);
        stats.record(SessionOutcome::Won, 4);
        stats.record(SessionOutcome::Lost, 6);
        stats.record(SessionOutcome::Won, 5);

        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.total_games, 4);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn in_progress_is_not_recorded() {
        let mut stats = Statistics::default();
        stats.record(SessionOutcome::InProgress, 2);
        assert_eq!(stats, Statistics::default());
    }
}
