//! Wordle
//!
//! Game core for Wordle: guess grading, the six-attempt round, and persistent
//! completion statistics, with TUI and line-oriented front ends.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_game::core::{Feedback, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("react").unwrap();
//!
//! let feedback = Feedback::evaluate(&secret, &guess);
//! println!("{feedback} {}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Round state machine and session
pub mod game;

// Completion statistics and their storage
pub mod stats;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
