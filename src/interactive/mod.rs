//! Interactive TUI game

mod app;
mod rendering;

pub use app::{App, InputMode, MAX_INPUT_LENGTH, Message, MessageStyle, run_tui};
