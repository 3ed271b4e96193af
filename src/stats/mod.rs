//! Completion statistics
//!
//! A pure aggregation step (`record_win`) plus the storage collaborator that
//! keeps the counts between sessions.

mod record;
mod store;

pub use record::{StatisticsRecord, record_win};
pub use store::{FORMAT_VERSION, JsonFileStore, MemoryStore, StatisticsStore};

use std::fmt;

/// Errors from statistics aggregation and storage
#[derive(Debug)]
pub enum StatsError {
    /// `record_win` was called with attempts outside 1..=6
    InvariantViolation { attempts_used: u8 },
    Io(std::io::Error),
    Format(serde_json::Error),
    UnsupportedVersion(u32),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolation { attempts_used } => {
                write!(f, "cannot record a win after {attempts_used} attempts")
            }
            Self::Io(e) => write!(f, "statistics storage error: {e}"),
            Self::Format(e) => write!(f, "statistics file is malformed: {e}"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported statistics format version {version}")
            }
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::InvariantViolation { .. } | Self::UnsupportedVersion(_) => None,
        }
    }
}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}
