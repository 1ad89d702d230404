//! Terminal output formatting
//!
//! Display utilities for the line-based game and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{print_keyboard, print_outcome, print_row, print_statistics};
