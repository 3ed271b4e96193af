//! Statistics storage
//!
//! The file store writes a small versioned JSON document. Saves go to a
//! temporary file in the same directory which is then renamed over the target,
//! so a crash mid-write never leaves a truncated record behind.

use super::{StatisticsRecord, StatsError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

const APP_DIR: &str = "wordle_game";
const FILE_NAME: &str = "statistics.json";
const FALLBACK_FILE_NAME: &str = "wordle_statistics.json";

/// Where completion counts are kept between sessions
pub trait StatisticsStore {
    /// Read the stored record; a store that has never been written yields zeros
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or decoded.
    fn load(&self) -> Result<StatisticsRecord, StatsError>;

    /// Replace the stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&mut self, record: &StatisticsRecord) -> Result<(), StatsError>;
}

#[derive(Serialize, Deserialize)]
struct StoredStatistics {
    version: u32,
    #[serde(flatten)]
    record: StatisticsRecord,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/wordle_game/statistics.json`, or a file in the working
    /// directory when the platform has no data directory
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_dir().map_or_else(
            || PathBuf::from(FALLBACK_FILE_NAME),
            |dir| dir.join(APP_DIR).join(FILE_NAME),
        )
    }
}

impl StatisticsStore for JsonFileStore {
    fn load(&self) -> Result<StatisticsRecord, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "no statistics at {}, starting from zero",
                    self.path.display()
                );
                return Ok(StatisticsRecord::default());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredStatistics = serde_json::from_str(&content)?;
        if stored.version != FORMAT_VERSION {
            return Err(StatsError::UnsupportedVersion(stored.version));
        }

        Ok(stored.record)
    }

    fn save(&mut self, record: &StatisticsRecord) -> Result<(), StatsError> {
        let stored = StoredStatistics {
            version: FORMAT_VERSION,
            record: *record,
        };
        let json = serde_json::to_string_pretty(&stored)?;
        write_atomic(&self.path, &json)?;
        log::debug!("statistics saved to {}", self.path.display());
        Ok(())
    }
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(FILE_NAME);

    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{base}.tmp-{}-{counter}", std::process::id()));
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(mut tmp) => {
                let written = tmp
                    .write_all(content.as_bytes())
                    .and_then(|()| tmp.sync_all());
                if let Err(e) = written {
                    let _ = fs::remove_file(&candidate);
                    return Err(e);
                }
                break candidate;
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e),
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Ok(dir_file) = File::open(dir) {
        let _ = dir_file.sync_all();
    }
    Ok(())
}

/// Store that keeps the record in memory only
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    record: StatisticsRecord,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(record: StatisticsRecord) -> Self {
        Self { record }
    }
}

impl StatisticsStore for MemoryStore {
    fn load(&self) -> Result<StatisticsRecord, StatsError> {
        Ok(self.record)
    }

    fn save(&mut self, record: &StatisticsRecord) -> Result<(), StatsError> {
        self.record = *record;
        Ok(())
    }
}
