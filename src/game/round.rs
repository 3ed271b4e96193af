//! State of a single round
//!
//! A round owns its secret word, the attempt counter and the outcome. Guesses
//! go through `accept_guess`, which validates them in a fixed order before any
//! state changes: length, then whether the round is still open, then
//! dictionary membership.

use super::WordProvider;
use crate::core::{Feedback, WORD_LENGTH, Word};
use std::fmt;

/// Attempts available in one round
pub const MAX_ATTEMPTS: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Why a submitted guess was not accepted
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    TooShort,
    TooLong,
    RoundClosed,
    NotAWord,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::TooShort => "Word too short",
            Self::TooLong => "Word too long",
            Self::RoundClosed => "The round is over",
            Self::NotAWord => "Invalid word",
        };
        f.write_str(message)
    }
}

impl std::error::Error for RejectionReason {}

/// An accepted guess together with its grading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    pub word: Word,
    pub feedback: Feedback,
    /// 1-based attempt number this guess used
    pub attempt: u8,
    /// Round outcome right after this guess
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    secret: Word,
    attempts_used: u8,
    outcome: Outcome,
    guesses: Vec<EvaluatedGuess>,
}

impl RoundState {
    /// Start a round with no attempts used
    #[must_use]
    pub fn start(secret: Word) -> Self {
        Self {
            secret,
            attempts_used: 0,
            outcome: Outcome::InProgress,
            guesses: Vec::with_capacity(usize::from(MAX_ATTEMPTS)),
        }
    }

    /// Validate, grade and record a guess
    ///
    /// Input is trimmed and case-insensitive. A rejected guess leaves the round
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// - `TooShort` / `TooLong` if the trimmed input is not 5 characters
    /// - `RoundClosed` if the round is already won or lost
    /// - `NotAWord` if the input is not a word the provider accepts
    pub fn accept_guess<P: WordProvider + ?Sized>(
        &mut self,
        input: &str,
        words: &P,
    ) -> Result<EvaluatedGuess, RejectionReason> {
        let input = input.trim();
        match input.chars().count() {
            n if n < WORD_LENGTH => return Err(RejectionReason::TooShort),
            n if n > WORD_LENGTH => return Err(RejectionReason::TooLong),
            _ => {}
        }

        if self.outcome != Outcome::InProgress {
            return Err(RejectionReason::RoundClosed);
        }

        let word = Word::new(input).map_err(|_| RejectionReason::NotAWord)?;
        if !words.is_valid_guess(&word) {
            return Err(RejectionReason::NotAWord);
        }

        self.attempts_used += 1;
        let feedback = Feedback::evaluate(&self.secret, &word);

        if word == self.secret {
            self.outcome = Outcome::Won;
        } else if self.attempts_used >= MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        }

        log::debug!(
            "attempt {}: {word} {feedback} -> {:?}",
            self.attempts_used,
            self.outcome
        );

        let evaluated = EvaluatedGuess {
            word,
            feedback,
            attempt: self.attempts_used,
            outcome: self.outcome,
        };
        self.guesses.push(evaluated.clone());

        Ok(evaluated)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[EvaluatedGuess] {
        &self.guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackClass::{Absent, Correct, Present};
    use crate::wordlists::WordList;

    fn words() -> WordList {
        WordList::from_strs(
            &["crane", "speed"],
            &["react", "erase", "slate", "audio", "robot", "floor", "eerie"],
        )
    }

    fn round(secret: &str) -> RoundState {
        RoundState::start(Word::new(secret).unwrap())
    }

    #[test]
    fn new_round_is_open() {
        let round = round("crane");
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.outcome(), Outcome::InProgress);
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn correct_guess_wins() {
        let mut round = round("crane");
        let result = round.accept_guess("CRANE", &words()).unwrap();

        assert_eq!(result.feedback.classes(), &[Correct; 5]);
        assert_eq!(result.attempt, 1);
        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(round.outcome(), Outcome::Won);
        assert!(round.is_over());
    }

    #[test]
    fn wrong_guess_keeps_round_open() {
        let mut round = round("crane");
        let result = round.accept_guess("react", &words()).unwrap();

        assert_eq!(
            result.feedback.classes(),
            &[Present, Present, Correct, Present, Absent]
        );
        assert_eq!(round.attempts_used(), 1);
        assert_eq!(round.outcome(), Outcome::InProgress);
    }

    #[test]
    fn input_is_trimmed_and_case_insensitive() {
        let mut round = round("crane");
        let result = round.accept_guess("  cRaNe \n", &words()).unwrap();
        assert_eq!(result.word.text(), "CRANE");
        assert_eq!(round.outcome(), Outcome::Won);
    }

    #[test]
    fn length_rejections_do_not_mutate() {
        let mut round = round("crane");
        assert_eq!(
            round.accept_guess("cran", &words()),
            Err(RejectionReason::TooShort)
        );
        assert_eq!(round.accept_guess("", &words()), Err(RejectionReason::TooShort));
        assert_eq!(
            round.accept_guess("cranes", &words()),
            Err(RejectionReason::TooLong)
        );
        assert_eq!(round.attempts_used(), 0);
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn unknown_word_rejected_without_using_attempt() {
        let mut round = round("crane");
        assert_eq!(
            round.accept_guess("zzzzz", &words()),
            Err(RejectionReason::NotAWord)
        );
        assert_eq!(
            round.accept_guess("cr4ne", &words()),
            Err(RejectionReason::NotAWord)
        );
        assert_eq!(round.attempts_used(), 0);
        assert_eq!(round.outcome(), Outcome::InProgress);
    }

    #[test]
    fn six_misses_lose_and_close_round() {
        let mut round = round("crane");
        let misses = ["react", "slate", "audio", "robot", "floor"];
        for (i, guess) in misses.iter().enumerate() {
            let result = round.accept_guess(guess, &words()).unwrap();
            assert_eq!(usize::from(result.attempt), i + 1);
            assert_eq!(result.outcome, Outcome::InProgress);
        }

        let last = round.accept_guess("erase", &words()).unwrap();
        assert_eq!(last.attempt, 6);
        assert_eq!(last.outcome, Outcome::Lost);
        assert_eq!(round.outcome(), Outcome::Lost);
        assert_eq!(round.attempts_used(), 6);

        assert_eq!(
            round.accept_guess("crane", &words()),
            Err(RejectionReason::RoundClosed)
        );
        assert_eq!(round.attempts_used(), 6);
        assert_eq!(round.guesses().len(), 6);
    }

    #[test]
    fn win_on_sixth_attempt_is_a_win() {
        let mut round = round("crane");
        for guess in ["react", "slate", "audio", "robot", "floor"] {
            round.accept_guess(guess, &words()).unwrap();
        }
        let last = round.accept_guess("crane", &words()).unwrap();
        assert_eq!(last.outcome, Outcome::Won);
    }

    #[test]
    fn closed_round_rejects_after_win() {
        let mut round = round("crane");
        round.accept_guess("crane", &words()).unwrap();
        assert_eq!(
            round.accept_guess("slate", &words()),
            Err(RejectionReason::RoundClosed)
        );
        assert_eq!(round.attempts_used(), 1);
    }

    #[test]
    fn length_is_checked_before_round_closed() {
        let mut round = round("crane");
        round.accept_guess("crane", &words()).unwrap();
        assert_eq!(
            round.accept_guess("toolong", &words()),
            Err(RejectionReason::TooLong)
        );
    }

    #[test]
    fn history_keeps_submission_order() {
        let mut round = round("speed");
        round.accept_guess("erase", &words()).unwrap();
        round.accept_guess("eerie", &words()).unwrap();

        let history: Vec<&str> = round.guesses().iter().map(|g| g.word.text()).collect();
        assert_eq!(history, ["ERASE", "EERIE"]);
        assert_eq!(
            round.guesses()[0].feedback.classes(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(RejectionReason::TooShort.to_string(), "Word too short");
        assert_eq!(RejectionReason::TooLong.to_string(), "Word too long");
        assert_eq!(RejectionReason::NotAWord.to_string(), "Invalid word");
        assert_eq!(RejectionReason::RoundClosed.to_string(), "The round is over");
    }
}
