//! Formatting utilities shared by the terminal front ends

use crate::core::Word;
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::stats::StatisticsRecord;

/// Prompt shown while a round is waiting for a guess
pub const GUESS_PROMPT: &str = "Take a guess!";

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// English ordinal: 1st, 2nd, 3rd, 4th, ...
#[must_use]
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Labelled statistics lines: the total first, then one line per attempt count
#[must_use]
pub fn statistics_rows(stats: &StatisticsRecord) -> Vec<(String, u32)> {
    let mut rows = Vec::with_capacity(usize::from(MAX_ATTEMPTS) + 1);
    rows.push(("Total games completed".to_string(), stats.total_completed));
    for attempt in 1..=MAX_ATTEMPTS {
        rows.push((
            format!("{} attempt completions", ordinal(attempt)),
            stats.completions_in(attempt),
        ));
    }
    rows
}

/// Announcement for a finished round, `None` while it is still in progress
#[must_use]
pub fn round_over_message(outcome: Outcome, secret: &Word) -> Option<String> {
    match outcome {
        Outcome::Won => Some(format!("You won! The answer was {secret}.")),
        Outcome::Lost => Some(format!("You lost! The answer was {secret}.")),
        Outcome::InProgress => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn ordinals() {
        let got: Vec<String> = [1, 2, 3, 4, 6, 11, 12, 13, 21, 22, 101]
            .into_iter()
            .map(ordinal)
            .collect();
        assert_eq!(
            got,
            ["1st", "2nd", "3rd", "4th", "6th", "11th", "12th", "13th", "21st", "22nd", "101st"]
        );
    }

    #[test]
    fn statistics_rows_match_record() {
        let stats = StatisticsRecord {
            total_completed: 4,
            completions_by_attempt: [0, 1, 2, 0, 1, 0],
        };
        let rows = statistics_rows(&stats);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Total games completed".to_string(), 4));
        assert_eq!(rows[1], ("1st attempt completions".to_string(), 0));
        assert_eq!(rows[3], ("3rd attempt completions".to_string(), 2));
        assert_eq!(rows[6], ("6th attempt completions".to_string(), 0));
    }

    #[test]
    fn round_over_messages() {
        let secret = Word::new("crane").unwrap();
        assert_eq!(
            round_over_message(Outcome::Won, &secret).as_deref(),
            Some("You won! The answer was CRANE.")
        );
        assert_eq!(
            round_over_message(Outcome::Lost, &secret).as_deref(),
            Some("You lost! The answer was CRANE.")
        );
        assert_eq!(round_over_message(Outcome::InProgress, &secret), None);
    }
}
