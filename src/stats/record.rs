//! Completion counts across sessions

use super::StatsError;
use crate::game::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Number of completed games, split by the attempt that found the word
///
/// `completions_by_attempt[i]` counts games won in exactly `i + 1` attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsRecord {
    pub total_completed: u32,
    pub completions_by_attempt: [u32; MAX_ATTEMPTS as usize],
}

impl StatisticsRecord {
    /// Games won in exactly `attempt` attempts (1-based); 0 outside 1..=6
    #[must_use]
    pub fn completions_in(&self, attempt: u8) -> u32 {
        usize::from(attempt)
            .checked_sub(1)
            .and_then(|i| self.completions_by_attempt.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Largest per-attempt count, used to scale distribution bars
    #[must_use]
    pub fn max_completions(&self) -> u32 {
        self.completions_by_attempt.iter().copied().max().unwrap_or(0)
    }
}

/// Count a win that took `attempts_used` attempts
///
/// # Errors
///
/// Returns `StatsError::InvariantViolation` if `attempts_used` is outside 1..=6.
/// That can only come from a caller bug; a finished round never produces it.
///
/// # Examples
/// ```
/// use wordle_game::stats::{StatisticsRecord, record_win};
///
/// let stats = record_win(&StatisticsRecord::default(), 3).unwrap();
/// assert_eq!(stats.total_completed, 1);
/// assert_eq!(stats.completions_by_attempt, [0, 0, 1, 0, 0, 0]);
/// ```
pub fn record_win(
    stats: &StatisticsRecord,
    attempts_used: u8,
) -> Result<StatisticsRecord, StatsError> {
    if !(1..=MAX_ATTEMPTS).contains(&attempts_used) {
        return Err(StatsError::InvariantViolation { attempts_used });
    }

    let mut updated = *stats;
    updated.total_completed = updated.total_completed.saturating_add(1);
    let slot = &mut updated.completions_by_attempt[usize::from(attempts_used - 1)];
    *slot = slot.saturating_add(1);

    Ok(updated)
}
