//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Action, App, InputMode, Message, MessageStyle, Reveal, run_tui, tiles_shown};
pub use rendering::ui;
