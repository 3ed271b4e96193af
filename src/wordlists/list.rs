//! The concrete word provider: a closed answer list plus a larger guess list

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use crate::game::WordProvider;
use rand::RngCore;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Secret-word candidates and the set of accepted guesses
///
/// Every answer is also an accepted guess.
#[derive(Debug, Clone)]
pub struct WordList {
    answers: Vec<Word>,
    allowed: FxHashSet<Word>,
}

impl WordList {
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: impl IntoIterator<Item = Word>) -> Self {
        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(answers.iter().cloned());
        Self { answers, allowed }
    }

    /// Lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    #[must_use]
    pub fn from_strs(answers: &[&str], allowed: &[&str]) -> Self {
        Self::new(words_from_slice(answers), words_from_slice(allowed))
    }

    /// Load lists from files, falling back to the embedded list for any path not given
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a given file cannot be read.
    pub fn from_files(answers: Option<&Path>, allowed: Option<&Path>) -> io::Result<Self> {
        let answers = match answers {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ANSWERS),
        };
        let allowed = match allowed {
            Some(path) => load_from_file(path)?,
            None => words_from_slice(ALLOWED),
        };
        Ok(Self::new(answers, allowed))
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

impl WordProvider for WordList {
    fn pick_secret(&self, rng: &mut dyn RngCore) -> Option<Word> {
        self.answers.choose(rng).cloned()
    }

    fn is_valid_guess(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }
}
