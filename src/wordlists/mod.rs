//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary and the `WordList`
//! provider built from them (or from user-supplied files).

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use list::WordList;
