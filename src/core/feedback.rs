//! Per-letter feedback for a guess
//!
//! Each position of a guess is graded as one of three classes:
//! - Correct: letter in the secret word at this exact position
//! - Present: letter in the secret word, but at another position
//! - Absent: letter not in the secret word (or all its occurrences already credited)

use super::budget::LetterBudget;
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Verdict for one letter position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackClass {
    Correct,
    Present,
    Absent,
}

impl FeedbackClass {
    /// Single-letter code: `G` (green), `Y` (yellow), `-` (gray)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered feedback for all 5 positions of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([FeedbackClass; WORD_LENGTH]);

impl Feedback {
    /// All greens (the guess is the secret word)
    pub const SOLVED: Self = Self([FeedbackClass::Correct; WORD_LENGTH]);

    /// Grade `guess` against `secret`
    ///
    /// Duplicate letters are rationed through a [`LetterBudget`] rebuilt from
    /// `secret` on every call, so earlier calls never influence later ones.
    ///
    /// # Algorithm
    /// 1. First pass: mark every exact position match Correct and consume its letter
    /// 2. Second pass: for the remaining positions, mark Present while the letter
    ///    still has budget left, otherwise Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, FeedbackClass::*, Word};
    ///
    /// let secret = Word::new("allot").unwrap();
    /// let guess = Word::new("llama").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&secret, &guess);
    /// assert_eq!(feedback.classes(), &[Present, Correct, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut classes = [FeedbackClass::Absent; WORD_LENGTH];
        let mut budget = LetterBudget::from_word(secret);

        // Exact matches claim their letters before any misplaced occurrence can
        for (i, class) in classes.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == secret.letter_at(i) {
                *class = FeedbackClass::Correct;
                budget.claim(letter);
            }
        }

        for (i, class) in classes.iter_mut().enumerate() {
            if *class == FeedbackClass::Correct {
                continue;
            }
            let letter = guess.letter_at(i);
            if secret.contains(letter) && budget.claim(letter) {
                *class = FeedbackClass::Present;
            }
        }

        Self(classes)
    }

    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[FeedbackClass; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count(&self, class: FeedbackClass) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|class| class.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.to_char())?;
        }
        Ok(())
    }
}
