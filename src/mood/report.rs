// src/mood/report.rs
// Aggregates over the mood history: daily averages, rolling mean, distribution, trend

use super::MoodEntry;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Window for the rolling average over daily points
pub const ROLLING_WINDOW: usize = 3;
/// Daily points needed before a trend is reported
pub const TREND_MIN_POINTS: usize = 7;
/// Most recent daily points compared against the rest of the trend span
pub const TREND_WINDOW: usize = 3;
/// Differences below this are "stable"
pub const TREND_THRESHOLD: f64 = 0.5;
/// Rows in the recent-entries table
pub const RECENT_ENTRIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    #[serde(rename = "improving")]
    Improving,
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "declining")]
    Declining,
    #[serde(rename = "insufficient data")]
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
            Self::InsufficientData => "insufficient data",
        }
    }

    /// One-line caption for the report
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Improving => "Your mood appears to be improving over the past week.",
            Self::Stable => "Your mood has been relatively stable recently.",
            Self::Declining => "Your mood has been trending lower recently.",
            Self::InsufficientData => "Log your mood on at least 7 different days to see a trend.",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAverage {
    pub date: NaiveDate,
    pub average: f64,
    /// Entries logged that day
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodReport {
    /// Ascending by date
    pub daily_averages: Vec<DailyAverage>,
    /// Same length as `daily_averages`
    pub rolling_average: Vec<f64>,
    /// Count per score present, ascending by score
    pub distribution: BTreeMap<u8, usize>,
    pub trend: Trend,
}

impl MoodReport {
    pub fn is_empty(&self) -> bool {
        self.daily_averages.is_empty()
    }
}

/// Build the full report. Pure; order of `entries` does not matter.
pub fn aggregate(entries: &[MoodEntry]) -> MoodReport {
    let daily_averages = daily_averages(entries);
    let points: Vec<f64> = daily_averages.iter().map(|d| d.average).collect();

    MoodReport {
        rolling_average: rolling_mean(&points, ROLLING_WINDOW),
        distribution: distribution(entries),
        trend: trend_direction(&points),
        daily_averages,
    }
}

/// Mean score per calendar date, ascending
pub fn daily_averages(entries: &[MoodEntry]) -> Vec<DailyAverage> {
    let mut by_date: BTreeMap<NaiveDate, (u32, usize)> = BTreeMap::new();
    for entry in entries {
        let slot = by_date.entry(entry.date()).or_default();
        slot.0 += entry.mood_score() as u32;
        slot.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailyAverage {
            date,
            average: sum as f64 / count as f64,
            count,
        })
        .collect()
}

/// Trailing moving average; the first points average over what is available
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let slice = &values[(i + 1).saturating_sub(window)..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

pub fn distribution(entries: &[MoodEntry]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.mood_score()).or_insert(0) += 1;
    }
    counts
}

/// Compare the mean of the last three daily points with the four before them
pub fn trend_direction(daily: &[f64]) -> Trend {
    if daily.len() < TREND_MIN_POINTS {
        return Trend::InsufficientData;
    }

    let n = daily.len();
    let recent = mean(&daily[n - TREND_WINDOW..]);
    let earlier = mean(&daily[n - TREND_MIN_POINTS..n - TREND_WINDOW]);
    let diff = recent - earlier;

    if diff.abs() < TREND_THRESHOLD {
        Trend::Stable
    } else if diff > 0.0 {
        Trend::Improving
    } else {
        Trend::Declining
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// The `n` most recently logged entries, newest first
pub fn recent_entries(entries: &[MoodEntry], n: usize) -> Vec<&MoodEntry> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::TIMESTAMP_FORMAT;
    use chrono::{Duration, NaiveDateTime};

    fn day(offset: i64, hour: u32, score: i64) -> MoodEntry {
        let base = NaiveDateTime::parse_from_str("2024-06-01 00:00:00", TIMESTAMP_FORMAT).unwrap();
        MoodEntry::new(base + Duration::days(offset) + Duration::hours(hour as i64), score, "", "")
    }

    fn daily(scores: &[i64]) -> Vec<MoodEntry> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| day(i as i64, 12, *s))
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ============================================================================
    // Daily averages
    // ============================================================================

    #[test]
    fn test_daily_averages_group_and_sort() {
        let entries = vec![day(1, 9, 4), day(0, 9, 2), day(1, 18, 5), day(0, 20, 3)];
        let daily = daily_averages(&entries);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(approx(daily[0].average, 2.5));
        assert_eq!(daily[0].count, 2);
        assert!(approx(daily[1].average, 4.5));
    }

    #[test]
    fn test_empty_history() {
        let report = aggregate(&[]);
        assert!(report.is_empty());
        assert!(report.rolling_average.is_empty());
        assert!(report.distribution.is_empty());
        assert_eq!(report.trend, Trend::InsufficientData);
    }

    // ============================================================================
    // Rolling mean
    // ============================================================================

    #[test]
    fn test_rolling_mean_min_period_one() {
        let rolled = rolling_mean(&[3.0, 5.0, 1.0, 3.0], 3);
        let expected = [3.0, 4.0, 3.0, 3.0];
        assert_eq!(rolled.len(), expected.len());
        for (a, b) in rolled.iter().zip(expected) {
            assert!(approx(*a, b), "{} != {}", a, b);
        }
    }

    #[test]
    fn test_rolling_mean_empty() {
        assert!(rolling_mean(&[], 3).is_empty());
    }

    // ============================================================================
    // Distribution
    // ============================================================================

    #[test]
    fn test_distribution_counts_present_scores() {
        let dist = distribution(&daily(&[1, 3, 3, 5]));
        let expected: BTreeMap<u8, usize> = [(1, 1), (3, 2), (5, 1)].into_iter().collect();
        assert_eq!(dist, expected);
    }

    // ============================================================================
    // Trend
    // ============================================================================

    #[test]
    fn test_trend_declining() {
        let report = aggregate(&daily(&[5, 5, 5, 1, 1, 1, 1]));
        assert_eq!(report.trend, Trend::Declining);
    }

    #[test]
    fn test_trend_improving() {
        assert_eq!(trend_direction(&[1.0, 1.0, 1.0, 1.0, 4.0, 5.0, 5.0]), Trend::Improving);
    }

    #[test]
    fn test_trend_earlier_span_includes_oldest_point() {
        // earlier 4.0, recent 4.5
        assert_eq!(trend_direction(&[1.0, 5.0, 5.0, 5.0, 4.5, 4.5, 4.5]), Trend::Improving);
        // earlier 5.0, recent 4.5
        assert_eq!(trend_direction(&[5.0, 5.0, 5.0, 5.0, 4.5, 4.5, 4.5]), Trend::Declining);
    }

    #[test]
    fn test_trend_uses_last_seven_points_only() {
        let daily = [1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0, 4.5, 4.5, 4.5];
        assert_eq!(trend_direction(&daily), Trend::Declining);
    }

    #[test]
    fn test_trend_stable_below_threshold() {
        assert_eq!(trend_direction(&[3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.4]), Trend::Stable);
    }

    #[test]
    fn test_trend_needs_seven_days() {
        assert_eq!(aggregate(&daily(&[5, 5, 5, 1, 1, 1])).trend, Trend::InsufficientData);
        // Many entries on few days still count as few points
        let entries: Vec<_> = (0..10).map(|h| day(h % 2, h as u32, 3)).collect();
        assert_eq!(aggregate(&entries).trend, Trend::InsufficientData);
    }

    #[test]
    fn test_trend_strings() {
        assert_eq!(Trend::InsufficientData.to_string(), "insufficient data");
        assert_eq!(serde_json::to_value(Trend::Declining).unwrap(), "declining");
        assert!(Trend::Stable.describe().contains("stable"));
    }

    // ============================================================================
    // Recent entries
    // ============================================================================

    #[test]
    fn test_recent_entries_newest_first() {
        let entries = daily(&[1, 2, 3, 4, 5, 1, 2]);
        let recent = recent_entries(&entries, RECENT_ENTRIES);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].mood_score(), 2);
        assert_eq!(recent[4].mood_score(), 3);
        assert!(recent_entries(&entries[..2], 5).len() == 2);
    }
}
