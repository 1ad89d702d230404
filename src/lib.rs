//! Wordle
//!
//! A terminal Wordle game: guess a hidden five-letter word in six tries,
//! with target words drawn from an online word service or a local list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{LetterState, Word, evaluate};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("react").unwrap();
//!
//! let feedback = evaluate(&target, &guess);
//! assert_eq!(feedback.state_at(2), LetterState::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and statistics
pub mod game;

// Target word sources
pub mod provider;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Error types
pub mod error;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
