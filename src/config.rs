//! Runtime configuration
//!
//! Resolved from the command line in `main`; everything else builds its
//! collaborators from a [`GameConfig`].

use crate::game::{GameError, Session};
use crate::stats::{JsonFileStore, MemoryStore, StatisticsStore};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Custom answer list; embedded list when `None`
    pub answers: Option<PathBuf>,
    /// Custom guess list; embedded list when `None`
    pub allowed: Option<PathBuf>,
    /// Statistics file; platform data directory when `None`
    pub stats_file: Option<PathBuf>,
    /// Keep statistics in memory only
    pub no_save: bool,
    /// Fixed RNG seed for reproducible secret words
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load the configured word lists
    ///
    /// # Errors
    ///
    /// Returns an error if a custom word list file cannot be read.
    pub fn word_list(&self) -> Result<WordList> {
        let words = WordList::from_files(self.answers.as_deref(), self.allowed.as_deref())
            .context("failed to load word list")?;
        log::info!(
            "{} answers, {} allowed guesses",
            words.answers().len(),
            words.allowed_count()
        );
        Ok(words)
    }

    #[must_use]
    pub fn stats_path(&self) -> PathBuf {
        self.stats_file
            .clone()
            .unwrap_or_else(JsonFileStore::default_path)
    }

    #[must_use]
    pub fn store(&self) -> Box<dyn StatisticsStore> {
        if self.no_save {
            Box::new(MemoryStore::default())
        } else {
            Box::new(JsonFileStore::new(self.stats_path()))
        }
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Build a session from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the word lists or stored statistics cannot be loaded.
    pub fn session(&self) -> Result<Session<WordList>> {
        let words = self.word_list()?;
        Session::new(words, self.store(), self.rng()).map_err(|e| {
            if matches!(e, GameError::Stats(_)) {
                anyhow::Error::new(e).context(format!(
                    "failed to load statistics from {}",
                    self.stats_path().display()
                ))
            } else {
                anyhow::Error::new(e)
            }
        })
    }
}
