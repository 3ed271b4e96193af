//! Round state machine and the session that drives it
//!
//! The round knows nothing about where words or statistics come from; both are
//! collaborators behind traits (`WordProvider` here, `StatisticsStore` in
//! [`crate::stats`]).

mod round;
mod session;

pub use round::{EvaluatedGuess, MAX_ATTEMPTS, Outcome, RejectionReason, RoundState};
pub use session::Session;

use crate::core::Word;
use crate::stats::StatsError;
use rand::RngCore;
use std::fmt;

/// Source of secret words and judge of which guesses are real words
pub trait WordProvider {
    /// Choose a secret word uniformly at random, or `None` if there are no answers
    fn pick_secret(&self, rng: &mut dyn RngCore) -> Option<Word>;

    /// Whether `word` may be submitted as a guess
    fn is_valid_guess(&self, word: &Word) -> bool;
}

/// Errors surfaced by a [`Session`]
#[derive(Debug)]
pub enum GameError {
    /// The guess was refused; nothing changed
    Rejected(RejectionReason),
    /// Statistics could not be updated, loaded or saved
    Stats(StatsError),
    /// The word provider has no secret words to choose from
    NoAnswers,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "{reason}"),
            Self::Stats(e) => write!(f, "{e}"),
            Self::NoAnswers => write!(f, "answer list is empty"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Stats(e) => Some(e),
            Self::NoAnswers => None,
        }
    }
}

impl From<RejectionReason> for GameError {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected(reason)
    }
}

impl From<StatsError> for GameError {
    fn from(e: StatsError) -> Self {
        Self::Stats(e)
    }
}
