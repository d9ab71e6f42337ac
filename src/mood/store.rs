// src/mood/store.rs
// CSV-backed mood log: whole-file read-modify-write, single writer

use super::{DATE_FORMAT, MoodEntry, TIMESTAMP_FORMAT};
use crate::error::{MindfulError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Row as written. Column order defines the header.
#[derive(Serialize)]
struct WriteRow<'a> {
    timestamp: String,
    date: String,
    mood_score: u8,
    mood_label: &'a str,
    notes: &'a str,
}

/// Row as read. Scores are read as floats so files written by other tools
/// ("4.0") still load.
#[derive(Deserialize)]
struct ReadRow {
    timestamp: String,
    date: String,
    mood_score: f64,
    #[serde(default)]
    mood_label: String,
    #[serde(default)]
    notes: Option<String>,
}

impl ReadRow {
    fn into_entry(self) -> Result<MoodEntry> {
        let timestamp = NaiveDateTime::parse_from_str(self.timestamp.trim(), TIMESTAMP_FORMAT)
            .map_err(|e| {
                MindfulError::InvalidInput(format!("bad timestamp '{}': {}", self.timestamp, e))
            })?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|e| MindfulError::InvalidInput(format!("bad date '{}': {}", self.date, e)))?;
        if !self.mood_score.is_finite() {
            return Err(MindfulError::InvalidInput(format!(
                "bad mood score {}",
                self.mood_score
            )));
        }

        Ok(MoodEntry::from_parts(
            timestamp,
            date,
            self.mood_score.round() as i64,
            self.mood_label,
            self.notes.unwrap_or_default(),
        ))
    }
}

/// Mood log file
#[derive(Debug, Clone)]
pub struct MoodStore {
    path: PathBuf,
}

impl MoodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict load: `Ok(empty)` when the file does not exist, `Err` when it
    /// cannot be read or parsed
    pub fn load(&self) -> Result<Vec<MoodEntry>> {
        let mut reader = match csv::Reader::from_path(&self.path) {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(io) = e.kind()
                    && io.kind() == ErrorKind::NotFound
                {
                    return Ok(Vec::new());
                }
                return Err(e.into());
            }
        };

        reader
            .deserialize::<ReadRow>()
            .map(|row| row.map_err(MindfulError::from).and_then(ReadRow::into_entry))
            .collect()
    }

    /// All entries in stored order. Missing or unreadable log reads as empty.
    pub fn read_all(&self) -> Vec<MoodEntry> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Mood log unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append one entry, creating the log if needed.
    ///
    /// A corrupt log is moved aside and replaced by a fresh one holding only
    /// `entry`. Errors are returned only when the new file cannot be written.
    pub fn append(&self, entry: &MoodEntry) -> Result<()> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                self.quarantine(&e);
                Vec::new()
            }
        };
        entries.push(entry.clone());
        self.write_all(&entries)?;

        debug!(
            path = %self.path.display(),
            score = entry.mood_score(),
            total = entries.len(),
            "Mood entry appended"
        );
        Ok(())
    }

    /// Delete the log. A missing file is not an error.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Mood log deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path a corrupt log is moved to
    fn quarantine_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "mood_data.csv".to_string());
        let stamp = Local::now().format("%Y%m%d%H%M%S");
        self.path.with_file_name(format!("{}.corrupt-{}", name, stamp))
    }

    fn quarantine(&self, cause: &MindfulError) {
        let target = self.quarantine_path();
        match fs::rename(&self.path, &target) {
            Ok(()) => error!(
                path = %self.path.display(),
                moved_to = %target.display(),
                error = %cause,
                "Mood log corrupt, moved aside and starting a fresh log"
            ),
            Err(e) => error!(
                path = %self.path.display(),
                error = %cause,
                rename_error = %e,
                "Mood log corrupt and could not be moved aside, overwriting"
            ),
        }
    }

    /// Write the full table to a temp sibling, then rename into place
    fn write_all(&self, entries: &[MoodEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_file_name(format!(
            "{}.tmp",
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        ));

        let mut writer = csv::Writer::from_path(&tmp)?;
        for entry in entries {
            writer.serialize(WriteRow {
                timestamp: entry.timestamp().format(TIMESTAMP_FORMAT).to_string(),
                date: entry.date().format(DATE_FORMAT).to_string(),
                mood_score: entry.mood_score(),
                mood_label: entry.mood_label(),
                notes: entry.notes(),
            })?;
        }
        writer.flush()?;
        drop(writer);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
