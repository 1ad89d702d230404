//! TUI application state and logic

use crate::config::GameConfig;
use crate::core::{LetterState, WORD_LENGTH, Word};
use crate::error::{GameError, Unavailable};
use crate::game::{GameSession, SessionOutcome, Statistics};
use crate::provider::{ProviderError, TARGET_PATTERN, WordProvider, draw_target};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;

/// How long to wait for a key before redrawing
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: GameSession,
    pub provider_name: String,
    pub reveal_delay: Duration,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub reveal: Option<Reveal>,
}

/// What the screen is currently waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Word fetch in flight
    Loading,
    /// Typing guesses
    Guessing,
    /// Game won or lost
    GameOver,
    /// Word fetch failed; waiting for a retry
    Unavailable,
}

/// Side effect requested by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    NewGame,
}

/// Staggered reveal of the most recent row
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Number of tiles of a row visible `elapsed` after its reveal started
#[must_use]
pub fn tiles_shown(elapsed: Duration, delay: Duration) -> usize {
    if delay.is_zero() {
        return WORD_LENGTH;
    }
    let steps = (elapsed.as_nanos() / delay.as_nanos()) as usize;
    (steps + 1).min(WORD_LENGTH)
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig, provider_name: impl Into<String>) -> Self {
        Self {
            session: GameSession::new(),
            provider_name: provider_name.into(),
            reveal_delay: config.reveal_delay,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Guess the five-letter word in six tries.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            reveal: None,
        }
    }

    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        if self.session.is_loading() {
            return InputMode::Loading;
        }
        match self.session.outcome() {
            None => InputMode::Unavailable,
            Some(SessionOutcome::InProgress) => InputMode::Guessing,
            Some(SessionOutcome::Won | SessionOutcome::Lost) => InputMode::GameOver,
        }
    }

    /// Throw away the current game and wait for a new word
    pub fn begin_new_game(&mut self) {
        self.session.begin_reset();
        self.input_buffer.clear();
        self.reveal = None;
        self.add_message(
            &format!("Fetching a word from {}...", self.provider_name),
            MessageStyle::Info,
        );
    }

    /// Install the word drawn for the new game
    pub fn finish_new_game(&mut self, drawn: Result<Word, GameError>) {
        match self.session.install_target(drawn) {
            Ok(()) => self.add_message("New game started! Type a guess.", MessageStyle::Info),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.add_message("Press 'n' to try again or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn type_char(&mut self, c: char) {
        if self.input_mode() == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < WORD_LENGTH
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed guess
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input) {
            Ok(_) => {
                let row = self.session.turns_taken() - 1;
                self.reveal = Some(Reveal {
                    row,
                    started: Instant::now(),
                });
                self.on_guess_accepted();
            }
            Err(err) => {
                if err.is_invalid_guess() {
                    // Keep the letters so the guess can be fixed
                    self.input_buffer = input;
                }
                let text = match err {
                    GameError::InvalidGuess(_) => "Not enough letters!".to_string(),
                    GameError::WordUnavailable(Unavailable::Loading) => {
                        "Still fetching a word, hang on...".to_string()
                    }
                    other => other.to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    fn on_guess_accepted(&mut self) {
        let Some(outcome) = self.session.outcome() else {
            return;
        };
        let turns = self.session.turns_taken();
        self.stats.record(outcome, turns);

        match outcome {
            SessionOutcome::Won => {
                let celebration = match turns {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionOutcome::Lost => {
                let word = self
                    .session
                    .revealed_target()
                    .map_or_else(String::new, |w| w.text().to_string());
                self.add_message(&format!("You lost! The word was {word}."), MessageStyle::Error);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            SessionOutcome::InProgress => {}
        }
    }

    /// Check if a row is still animating at `now`
    #[must_use]
    pub fn is_revealing(&self, now: Instant) -> bool {
        self.reveal.is_some_and(|reveal| {
            tiles_shown(now.duration_since(reveal.started), self.reveal_delay) < WORD_LENGTH
        })
    }

    /// Keyboard shading at `now`
    ///
    /// Letters of a row that is still flipping stay hidden; earlier rows
    /// keep their colors.
    #[must_use]
    pub fn keyboard_hints(&self, now: Instant) -> FxHashMap<char, LetterState> {
        match self.reveal {
            Some(reveal) if self.is_revealing(now) => {
                self.session.letter_hints_through(reveal.row)
            }
            _ => self.session.letter_hints(),
        }
    }

    /// Number of tiles of `row` to show colored at `now`
    #[must_use]
    pub fn visible_tiles(&self, row: usize, now: Instant) -> usize {
        match self.reveal {
            Some(reveal) if reveal.row == row => {
                tiles_shown(now.duration_since(reveal.started), self.reveal_delay)
            }
            _ => WORD_LENGTH,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Action::None;
        }
        if key.code == KeyCode::Esc {
            self.should_quit = true;
            return Action::None;
        }

        match self.input_mode() {
            InputMode::Loading => {}
            InputMode::GameOver | InputMode::Unavailable => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => return Action::NewGame,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Action::NewGame;
                }
                // Letters typed while a row is still flipping would land on the next row
                _ if self.is_revealing(Instant::now()) => {}
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }

        Action::None
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App, provider: Arc<dyn WordProvider>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, &provider).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn spawn_draw(provider: &Arc<dyn WordProvider>) -> JoinHandle<Result<Word, GameError>> {
    let provider = Arc::clone(provider);
    tokio::spawn(async move { draw_target(provider.as_ref(), TARGET_PATTERN).await })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    provider: &Arc<dyn WordProvider>,
) -> Result<()> {
    app.begin_new_game();
    let mut pending = Some(spawn_draw(provider));

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Some(handle) = pending.take_if(|handle| handle.is_finished()) {
            let drawn = handle
                .await
                .unwrap_or_else(|err| Err(ProviderError::TaskFailed(err.to_string()).into()));
            app.finish_new_game(drawn);
        }

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Action::NewGame
            && pending.is_none()
        {
            debug!("new game requested");
            app.begin_new_game();
            pending = Some(spawn_draw(provider));
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = pending {
        handle.abort();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_TURNS;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_target(target: &str) -> App {
        let mut app = App::new(
            &GameConfig {
                reveal_delay: Duration::ZERO,
                ..GameConfig::default()
            },
            "test",
        );
        app.begin_new_game();
        app.finish_new_game(Ok(Word::new(target).unwrap()));
        app
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn tiles_shown_staggers_by_delay() {
        let delay = Duration::from_millis(100);
        assert_eq!(tiles_shown(Duration::ZERO, delay), 1);
        assert_eq!(tiles_shown(Duration::from_millis(250), delay), 3);
        assert_eq!(tiles_shown(Duration::from_secs(5), delay), WORD_LENGTH);
        assert_eq!(tiles_shown(Duration::ZERO, Duration::ZERO), WORD_LENGTH);
    }

    #[test]
    fn new_app_waits_for_word() {
        let mut app = App::new(&GameConfig::default(), "test");
        assert_eq!(app.input_mode(), InputMode::Unavailable);

        app.begin_new_game();
        assert_eq!(app.input_mode(), InputMode::Loading);

        // Typing is ignored until the word arrives
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let mut app = app_with_target("crane");
        for c in "slatex1".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "SLATE");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "SLAT");
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let mut app = app_with_target("crane");
        type_word(&mut app, "ab");

        assert_eq!(app.input_buffer, "AB");
        assert!(app.session.history().is_empty());
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn winning_updates_stats_and_mode() {
        let mut app = app_with_target("crane");
        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.input_mode(), InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_reveals_word() {
        let mut app = app_with_target("crane");
        for guess in ["slate", "irate", "audio", "pious", "bloke", "fjord"] {
            type_word(&mut app, guess);
        }

        assert_eq!(app.session.turns_taken(), MAX_TURNS);
        assert_eq!(app.input_mode(), InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn game_over_keys() {
        let mut app = app_with_target("crane");
        type_word(&mut app, "crane");

        assert_eq!(app.handle_key(key(KeyCode::Char('n'))), Action::NewGame);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn q_is_a_letter_while_guessing() {
        let mut app = app_with_target("crane");
        app.handle_key(key(KeyCode::Char('q')));
        assert_eq!(app.input_buffer, "Q");
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_n_starts_new_game_mid_round() {
        let mut app = app_with_target("crane");
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::NewGame);
    }

    #[test]
    fn failed_fetch_allows_retry() {
        let mut app = App::new(&GameConfig::default(), "test");
        app.begin_new_game();
        app.finish_new_game(Err(ProviderError::TaskFailed("offline".to_string()).into()));

        assert_eq!(app.input_mode(), InputMode::Unavailable);
        assert_eq!(app.handle_key(key(KeyCode::Char('n'))), Action::NewGame);
    }

    #[test]
    fn reveal_tracks_latest_row() {
        let mut app = app_with_target("crane");
        app.reveal_delay = Duration::from_secs(60);
        type_word(&mut app, "slate");

        let now = Instant::now();
        assert!(app.is_revealing(now));
        assert_eq!(app.visible_tiles(0, now), 1);
        assert_eq!(app.visible_tiles(1, now), WORD_LENGTH);

        // Keys are held back until the row has flipped
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn keyboard_keeps_earlier_hints_during_reveal() {
        let mut app = app_with_target("crane");
        type_word(&mut app, "slate");

        app.reveal = None;
        app.reveal_delay = Duration::from_secs(60);
        type_word(&mut app, "ocean");

        let now = Instant::now();
        assert!(app.is_revealing(now));
        let hints = app.keyboard_hints(now);
        assert_eq!(hints.get(&'A'), Some(&LetterState::Correct));
        assert_eq!(hints.get(&'S'), Some(&LetterState::Absent));
        // Letters only in the flipping row are held back
        assert_eq!(hints.get(&'O'), None);
        assert_eq!(hints.get(&'C'), None);

        app.reveal = None;
        let hints = app.keyboard_hints(now);
        assert_eq!(hints.get(&'O'), Some(&LetterState::Absent));
        assert_eq!(hints.get(&'C'), Some(&LetterState::Present));
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = App::new(&GameConfig::default(), "test");
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
