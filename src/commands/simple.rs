//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: type a guess, get a colored row back.

use crate::config::GameConfig;
use crate::core::LetterState;
use crate::error::GameError;
use crate::game::{EvaluatedGuess, GameSession, MAX_TURNS, Statistics};
use crate::output::formatters::tile;
use crate::output::{print_keyboard, print_outcome, print_statistics};
use crate::provider::WordProvider;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type InputLines = Lines<BufReader<Stdin>>;

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    NewGame,
    Help,
    Guess(String),
}

impl Input {
    /// Interpret a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" | ":q" => Self::Quit,
            "new" | "n" | "restart" => Self::NewGame,
            "help" | "?" => Self::Help,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub async fn run_simple(provider: &dyn WordProvider, config: &GameConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut session = GameSession::new();
    let mut stats = Statistics::default();

    'games: loop {
        if !start_game(&mut session, provider, &mut lines).await? {
            break;
        }

        while session.is_accepting() {
            let turn = session.turns_taken() + 1;
            let Some(line) = prompt(&mut lines, &format!("Guess {turn}/{MAX_TURNS}")).await?
            else {
                break 'games;
            };

            match Input::parse(&line) {
                Input::Quit => break 'games,
                Input::NewGame => continue 'games,
                Input::Help => print_help(),
                Input::Guess(guess) => match session.submit_guess(&guess) {
                    Ok(evaluated) => {
                        let evaluated = evaluated.clone();
                        reveal_row(turn, &evaluated, config.reveal_delay).await?;
                        println!();
                        print_keyboard(&session.letter_hints());
                        println!();
                    }
                    Err(err) => println!("{} {err}\n", "✗".red().bold()),
                },
            }
        }

        if let Some(outcome) = session.outcome() {
            stats.record(outcome, session.turns_taken());
        }
        print_outcome(&session);
        print_statistics(&stats);
        println!();

        let Some(answer) = prompt(&mut lines, "Play again? (yes/no)").await? else {
            break;
        };
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            break;
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Draw a new target word, offering retries when the source fails
///
/// Returns `false` if the user gives up.
async fn start_game(
    session: &mut GameSession,
    provider: &dyn WordProvider,
    lines: &mut InputLines,
) -> Result<bool> {
    loop {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.blue} {msg}")?);
        spinner.set_message(format!("Fetching a word from {}...", provider.name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = session.reset(provider).await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => {
                println!("🔄 New game! You have {MAX_TURNS} guesses.\n");
                return Ok(true);
            }
            Err(err @ GameError::WordUnavailable(_)) => {
                println!("{} {err}", "✗".red().bold());
                let Some(answer) = prompt(lines, "Try again? (yes/no)").await? else {
                    return Ok(false);
                };
                if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    return Ok(false);
                }
            }
            Err(err) => return Err(err.into()),
        }
    }
}

/// Print tiles one at a time, pausing `delay` after each
async fn reveal_row(turn: usize, evaluated: &EvaluatedGuess, delay: Duration) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "  {} ", format!("{turn}.").bright_black())?;

    for (letter, state) in evaluated.letters() {
        write!(stdout, "{}", tile(letter, state))?;
        stdout.flush()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    writeln!(stdout, "  {}", evaluated.feedback.to_emoji())?;
    Ok(())
}

fn print_help() {
    println!("Guess the five-letter word in {MAX_TURNS} tries.");
    println!("  {} right letter, right spot", tile('A', LetterState::Correct));
    println!("  {} right letter, wrong spot", tile('B', LetterState::Present));
    println!("  {} not in the word", tile('C', LetterState::Absent));
    println!("Commands: 'new' for a new word, 'quit' to exit, 'help' for this text\n");
}

/// Get user input with a prompt; `None` on end of input
async fn prompt(lines: &mut InputLines, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    std::io::stdout().flush()?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}
