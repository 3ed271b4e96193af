//! Per-letter allowance used while grading a single guess

use super::Word;

const ALPHABET_SIZE: usize = 26;

/// Remaining occurrences of each letter of the secret word that a guess can still claim
///
/// Built fresh from the secret word for every guess. Each `Correct` or `Present`
/// mark consumes one unit, so a letter can never be credited more often than it
/// occurs in the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBudget {
    remaining: [u8; ALPHABET_SIZE],
}

impl LetterBudget {
    /// Count every letter of `word`
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut remaining = [0u8; ALPHABET_SIZE];
        for &letter in word.letters() {
            if let Some(slot) = slot(letter) {
                remaining[slot] += 1;
            }
        }
        Self { remaining }
    }

    /// Units of `letter` still available (0 for anything outside A-Z)
    #[must_use]
    pub fn remaining(&self, letter: u8) -> u8 {
        slot(letter).map_or(0, |slot| self.remaining[slot])
    }

    /// Consume one unit of `letter`
    ///
    /// Returns `false` without changing anything when none is left.
    pub fn claim(&mut self, letter: u8) -> bool {
        match slot(letter) {
            Some(slot) if self.remaining[slot] > 0 => {
                self.remaining[slot] -= 1;
                log::trace!(
                    "claimed {}, {} left",
                    char::from(letter),
                    self.remaining[slot]
                );
                true
            }
            _ => false,
        }
    }
}

fn slot(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}
