//! Core domain types for Wordle
//!
//! This module contains the word type and the guess grading algorithm.
//! Everything here is pure: no I/O, no randomness, no global state.

mod budget;
mod feedback;
mod word;

pub use budget::LetterBudget;
pub use feedback::{Feedback, FeedbackClass};
pub use word::{WORD_LENGTH, Word, WordError};
