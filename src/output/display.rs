//! Display functions for the line-based front end

use super::formatters::{blank_tile, create_progress_bar, tile};
use crate::core::LetterState;
use crate::game::{EvaluatedGuess, GameSession, SessionOutcome, Statistics};
use colored::Colorize;
use rustc_hash::FxHashMap;

/// Keyboard layout used for letter hints
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print an evaluated guess as a row of colored tiles followed by its emoji line
pub fn print_row(turn: usize, evaluated: &EvaluatedGuess) {
    let tiles: String = evaluated
        .letters()
        .map(|(letter, state)| tile(letter, state).to_string())
        .collect();
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        tiles,
        evaluated.feedback.to_emoji()
    );
}

/// Print the keyboard, shading each letter by the best state it reached
pub fn print_keyboard(hints: &FxHashMap<char, LetterState>) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|letter| {
                hints
                    .get(&letter)
                    .map_or_else(|| blank_tile(letter), |&state| tile(letter, state))
                    .to_string()
            })
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys);
    }
}

/// Print the end-of-game banner
pub fn print_outcome(session: &GameSession) {
    let Some(outcome) = session.outcome() else {
        return;
    };

    println!("\n{}", "═".repeat(50).bright_cyan());
    match outcome {
        SessionOutcome::Won => {
            let turns = session.turns_taken();
            let praise = match turns {
                1 => "🎯 Genius!",
                2 => "🔥 Magnificent!",
                3 => "✨ Impressive!",
                4 => "👏 Splendid!",
                5 => "🎉 Great!",
                _ => "😅 Phew!",
            };
            println!("  {}", praise.bright_green().bold());
            println!(
                "  Solved in {} {}",
                turns.to_string().bright_cyan().bold(),
                if turns == 1 { "guess" } else { "guesses" }
            );
        }
        SessionOutcome::Lost => {
            println!("  {}", "❌ You lost!".red().bold());
        }
        SessionOutcome::InProgress => {}
    }

    if let Some(target) = session.revealed_target() {
        println!("  The word was {}", target.text().bright_yellow().bold());
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the statistics gathered so far
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!("   Win rate:        {:.0}%", stats.win_rate());
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let max = stats.max_bucket() as f64;
    for (turns, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max, 30);
        println!("   {turns}: {} {count}", bar.green());
    }
}
