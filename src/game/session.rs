//! A play session: consecutive rounds sharing one statistics record

use super::{EvaluatedGuess, GameError, Outcome, RoundState, WordProvider};
use crate::stats::{StatisticsRecord, StatisticsStore, record_win};
use rand::rngs::StdRng;

/// Drives rounds for a front end
///
/// Owns the word provider, the statistics store and the RNG used to pick
/// secret words. Statistics are updated exactly once per won round.
pub struct Session<P: WordProvider> {
    words: P,
    store: Box<dyn StatisticsStore>,
    rng: StdRng,
    round: RoundState,
    stats: StatisticsRecord,
    /// A win is counted in `stats` but the store has not accepted it yet
    unsaved: bool,
}

impl<P: WordProvider> Session<P> {
    /// Load statistics and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the stored statistics cannot be read or the
    /// provider has no secret words.
    pub fn new(
        words: P,
        store: Box<dyn StatisticsStore>,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let stats = store.load()?;
        let secret = words.pick_secret(&mut rng).ok_or(GameError::NoAnswers)?;
        log::info!(
            "session started, {} games completed so far",
            stats.total_completed
        );

        Ok(Self {
            words,
            store,
            rng,
            round: RoundState::start(secret),
            stats,
            unsaved: false,
        })
    }

    /// Abandon the current round and start another with a fresh secret word
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoAnswers` if the provider has no secret words.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        let secret = self
            .words
            .pick_secret(&mut self.rng)
            .ok_or(GameError::NoAnswers)?;
        log::debug!("new round started");
        self.round = RoundState::start(secret);
        Ok(())
    }

    /// Submit a guess for the current round
    ///
    /// On the guess that wins the round, the win is counted and saved.
    ///
    /// # Errors
    ///
    /// - `GameError::Rejected` if the round refused the guess
    /// - `GameError::Stats` if the win could not be saved; the guess itself is
    ///   already recorded in [`Session::round`] and the in-memory statistics
    ///   are updated
    pub fn submit(&mut self, input: &str) -> Result<EvaluatedGuess, GameError> {
        let evaluated = self.round.accept_guess(input, &self.words)?;

        match evaluated.outcome {
            Outcome::Won => {
                log::info!("round won in {} attempts", evaluated.attempt);
                self.stats = record_win(&self.stats, evaluated.attempt)?;
                self.save()?;
            }
            Outcome::Lost => log::info!("round lost, answer was {}", self.round.secret()),
            Outcome::InProgress => {}
        }

        Ok(evaluated)
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn statistics(&self) -> &StatisticsRecord {
        &self.stats
    }

    /// Re-read statistics from the store
    ///
    /// While a win is still unsaved the store is behind, so the save is
    /// retried instead and the in-memory counts are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read, or the pending save fails
    /// again.
    pub fn reload_statistics(&mut self) -> Result<&StatisticsRecord, GameError> {
        if self.unsaved {
            self.save()?;
        } else {
            self.stats = self.store.load()?;
        }
        Ok(&self.stats)
    }

    /// Zero all counts and save
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn reset_statistics(&mut self) -> Result<(), GameError> {
        self.stats = StatisticsRecord::default();
        self.save()?;
        log::info!("statistics reset");
        Ok(())
    }

    fn save(&mut self) -> Result<(), GameError> {
        match self.store.save(&self.stats) {
            Ok(()) => {
                self.unsaved = false;
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to save statistics: {e}");
                self.unsaved = true;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RejectionReason;
    use crate::stats::{MemoryStore, StatsError};
    use crate::wordlists::WordList;
    use rand::SeedableRng;

    fn words() -> WordList {
        WordList::from_strs(&["crane"], &["slate", "react", "audio"])
    }

    fn session() -> Session<WordList> {
        Session::new(
            words(),
            Box::new(MemoryStore::default()),
            StdRng::seed_from_u64(7),
        )
        .unwrap()
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl StatisticsStore for ReadOnlyStore {
        fn load(&self) -> Result<StatisticsRecord, StatsError> {
            Ok(StatisticsRecord::default())
        }

        fn save(&mut self, _record: &StatisticsRecord) -> Result<(), StatsError> {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
        }
    }

    #[test]
    fn single_answer_is_the_secret() {
        let session = session();
        assert_eq!(session.round().secret().text(), "CRANE");
        assert_eq!(session.round().outcome(), Outcome::InProgress);
    }

    #[test]
    fn win_records_statistics_once() {
        let mut session = session();
        session.submit("slate").unwrap();
        session.submit("react").unwrap();
        let result = session.submit("crane").unwrap();

        assert_eq!(result.outcome, Outcome::Won);
        assert_eq!(session.statistics().total_completed, 1);
        assert_eq!(
            session.statistics().completions_by_attempt,
            [0, 0, 1, 0, 0, 0]
        );

        // Further submissions are refused and do not count again
        assert!(matches!(
            session.submit("crane"),
            Err(GameError::Rejected(RejectionReason::RoundClosed))
        ));
        assert_eq!(session.statistics().total_completed, 1);
    }

    #[test]
    fn win_is_saved_to_store() {
        let mut session = session();
        session.submit("crane").unwrap();

        let stored = session.reload_statistics().unwrap();
        assert_eq!(stored.total_completed, 1);
        assert_eq!(stored.completions_by_attempt, [1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn loss_leaves_statistics_alone() {
        let mut session = session();
        for _ in 0..6 {
            session.submit("slate").unwrap();
        }
        assert_eq!(session.round().outcome(), Outcome::Lost);
        assert_eq!(*session.statistics(), StatisticsRecord::default());
    }

    #[test]
    fn rejected_guess_is_reported() {
        let mut session = session();
        assert!(matches!(
            session.submit("cran"),
            Err(GameError::Rejected(RejectionReason::TooShort))
        ));
        assert!(matches!(
            session.submit("zzzzz"),
            Err(GameError::Rejected(RejectionReason::NotAWord))
        ));
        assert_eq!(session.round().attempts_used(), 0);
    }

    #[test]
    fn new_round_resets_round_but_not_statistics() {
        let mut session = session();
        session.submit("crane").unwrap();
        session.new_round().unwrap();

        assert_eq!(session.round().attempts_used(), 0);
        assert_eq!(session.round().outcome(), Outcome::InProgress);
        assert_eq!(session.statistics().total_completed, 1);
    }

    #[test]
    fn statistics_are_loaded_at_start() {
        let existing = StatisticsRecord {
            total_completed: 2,
            completions_by_attempt: [0, 1, 1, 0, 0, 0],
        };
        let mut session = Session::new(
            words(),
            Box::new(MemoryStore::new(existing)),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        assert_eq!(*session.statistics(), existing);

        session.submit("crane").unwrap();
        assert_eq!(session.statistics().total_completed, 3);
        assert_eq!(
            session.statistics().completions_by_attempt,
            [1, 1, 1, 0, 0, 0]
        );
    }

    #[test]
    fn reset_statistics_zeroes_store() {
        let mut session = session();
        session.submit("crane").unwrap();
        session.reset_statistics().unwrap();

        assert_eq!(
            *session.reload_statistics().unwrap(),
            StatisticsRecord::default()
        );
    }

    #[test]
    fn failed_save_still_records_guess() {
        let mut session = Session::new(
            words(),
            Box::new(ReadOnlyStore),
            StdRng::seed_from_u64(3),
        )
        .unwrap();

        assert!(matches!(session.submit("crane"), Err(GameError::Stats(_))));
        assert_eq!(session.round().outcome(), Outcome::Won);
        assert_eq!(session.round().guesses().len(), 1);
        assert_eq!(session.statistics().total_completed, 1);
    }

    #[test]
    fn reload_keeps_unsaved_win() {
        let mut session = Session::new(
            words(),
            Box::new(ReadOnlyStore),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert!(session.submit("crane").is_err());

        // The store still holds zeros; the win must survive the refresh
        assert!(matches!(
            session.reload_statistics(),
            Err(GameError::Stats(_))
        ));
        assert_eq!(session.statistics().total_completed, 1);

        // The next win builds on the unsaved one
        session.new_round().unwrap();
        assert!(session.submit("crane").is_err());
        assert_eq!(session.statistics().total_completed, 2);
        assert_eq!(session.statistics().completions_in(1), 2);
    }

    /// Store that refuses the first save and accepts the rest
    struct FlakyStore {
        fail_next: bool,
        saved: Option<StatisticsRecord>,
    }

    impl StatisticsStore for FlakyStore {
        fn load(&self) -> Result<StatisticsRecord, StatsError> {
            Ok(self.saved.unwrap_or_default())
        }

        fn save(&mut self, record: &StatisticsRecord) -> Result<(), StatsError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(std::io::Error::from(std::io::ErrorKind::Interrupted).into());
            }
            self.saved = Some(*record);
            Ok(())
        }
    }

    #[test]
    fn reload_retries_pending_save() {
        let store = FlakyStore {
            fail_next: true,
            saved: None,
        };
        let mut session =
            Session::new(words(), Box::new(store), StdRng::seed_from_u64(3)).unwrap();
        assert!(session.submit("crane").is_err());

        // Retry succeeds and writes the win
        assert_eq!(session.reload_statistics().unwrap().total_completed, 1);
        // Now a plain load, which returns what was saved
        assert_eq!(session.reload_statistics().unwrap().total_completed, 1);
    }

    #[test]
    fn empty_answer_list_is_an_error() {
        let result = Session::new(
            WordList::from_strs(&[], &["slate"]),
            Box::new(MemoryStore::default()),
            StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(GameError::NoAnswers)));
    }
}
