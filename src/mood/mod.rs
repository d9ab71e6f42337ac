// src/mood/mod.rs
// Mood log entries, CSV persistence and reporting

pub mod report;
pub mod store;

use crate::sentiment::{MAX_SCORE, MIN_SCORE, SentimentResult};
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

pub use report::{DailyAverage, MoodReport, Trend, aggregate, recent_entries};
pub use store::MoodStore;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The five moods offered by the mood picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    VerySad = 1,
    Sad = 2,
    Neutral = 3,
    Happy = 4,
    VeryHappy = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        Self::VerySad,
        Self::Sad,
        Self::Neutral,
        Self::Happy,
        Self::VeryHappy,
    ];

    /// Level for a score, clamping out-of-range values
    pub fn from_score(score: i64) -> Self {
        match score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) {
            1 => Self::VerySad,
            2 => Self::Sad,
            3 => Self::Neutral,
            4 => Self::Happy,
            _ => Self::VeryHappy,
        }
    }

    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Label stored in the mood log
    pub fn label(&self) -> &'static str {
        match self {
            Self::VerySad => "very sad",
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::VeryHappy => "very happy",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VerySad => "Very Sad",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::VeryHappy => "Very Happy",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One logged mood. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    timestamp: NaiveDateTime,
    date: NaiveDate,
    mood_score: u8,
    mood_label: String,
    notes: String,
}

impl MoodEntry {
    /// Build an entry logged at `timestamp` (truncated to whole seconds).
    /// An empty label is replaced by the mood level's label.
    pub fn new(
        timestamp: NaiveDateTime,
        mood_score: i64,
        mood_label: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.with_nanosecond(0).unwrap_or(timestamp);
        Self::from_parts(timestamp, timestamp.date(), mood_score, mood_label, notes)
    }

    /// Entry logged now, local time
    pub fn now(mood_score: i64, mood_label: impl Into<String>, notes: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), mood_score, mood_label, notes)
    }

    /// Entry for a mood picked from the presets
    pub fn from_level(level: MoodLevel, notes: impl Into<String>) -> Self {
        Self::now(level.score() as i64, level.label(), notes)
    }

    /// Entry recording a classified message
    pub fn from_sentiment(result: &SentimentResult, notes: impl Into<String>) -> Self {
        Self::now(result.score() as i64, result.label(), notes)
    }

    /// Rebuild a stored row; the stored date is kept as written
    pub(crate) fn from_parts(
        timestamp: NaiveDateTime,
        date: NaiveDate,
        mood_score: i64,
        mood_label: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        let mood_score = MoodLevel::from_score(mood_score).score();
        let label = mood_label.into().trim().to_string();
        let mood_label = if label.is_empty() {
            MoodLevel::from_score(mood_score as i64).label().to_string()
        } else {
            label
        };

        Self {
            timestamp,
            date,
            mood_score,
            mood_label,
            notes: notes.into(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn mood_score(&self) -> u8 {
        self.mood_score
    }

    pub fn mood_label(&self) -> &str {
        &self.mood_label
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}
