//! Check command
//!
//! Grades a single guess against a given secret word, outside of any round.

use crate::core::{Feedback, Word};
use crate::game::WordProvider;

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Grade `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (not 5 letters or contains non-letters)
/// - The guess is not an allowed guess
pub fn check_guess<P: WordProvider>(
    secret: &str,
    guess: &str,
    words: &P,
) -> Result<CheckResult, String> {
    let secret = Word::new(secret.trim()).map_err(|e| format!("Invalid secret word: {e}"))?;
    let guess = Word::new(guess.trim()).map_err(|e| format!("Invalid guess: {e}"))?;

    if !words.is_valid_guess(&guess) {
        return Err(format!("Word '{guess}' not in word list"));
    }

    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackClass::{Absent, Correct, Present};
    use crate::wordlists::WordList;

    fn words() -> WordList {
        WordList::from_strs(&["crane", "speed"], &["react", "erase"])
    }

    #[test]
    fn check_valid_pair() {
        let result = check_guess("speed", "erase", &words()).unwrap();

        assert_eq!(result.secret.text(), "SPEED");
        assert_eq!(result.guess.text(), "ERASE");
        assert_eq!(
            result.feedback.classes(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn check_exact_match() {
        let result = check_guess("CRANE", "crane", &words()).unwrap();
        assert!(result.feedback.is_solved());
        assert_eq!(result.feedback.count(Correct), 5);
    }

    #[test]
    fn secret_need_not_be_in_list() {
        assert!(check_guess("zebra", "react", &words()).is_ok());
    }

    #[test]
    fn unknown_guess_rejected() {
        let err = check_guess("crane", "zzzzz", &words()).err().unwrap();
        assert!(err.contains("not in word list"));
    }

    #[test]
    fn malformed_words_rejected() {
        assert!(check_guess("cran", "react", &words()).is_err());
        assert!(check_guess("crane", "re4ct", &words()).is_err());
    }
}
