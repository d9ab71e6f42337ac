// tests/report_test.rs
// Mood reporting over a stored history

use chrono::{Duration, NaiveDate, NaiveDateTime};
use mindful::mood::{MoodEntry, MoodStore, TIMESTAMP_FORMAT, Trend, aggregate, recent_entries};
use std::collections::BTreeMap;
use tempfile::TempDir;

fn history(scores_per_day: &[&[i64]]) -> Vec<MoodEntry> {
    let start = NaiveDateTime::parse_from_str("2024-02-26 07:00:00", TIMESTAMP_FORMAT).unwrap();
    let mut entries = Vec::new();
    for (day, scores) in scores_per_day.iter().enumerate() {
        for (i, score) in scores.iter().enumerate() {
            let ts = start + Duration::days(day as i64) + Duration::hours(3 * i as i64);
            entries.push(MoodEntry::new(ts, *score, "", format!("day {} #{}", day, i)));
        }
    }
    entries
}

#[test]
fn test_declining_week_from_disk() {
    let dir = TempDir::new().unwrap();
    let store = MoodStore::new(dir.path().join("mood_data.csv"));
    for entry in history(&[&[5], &[5], &[5], &[1], &[1], &[1], &[1]]) {
        store.append(&entry).unwrap();
    }

    let report = aggregate(&store.read_all());
    assert_eq!(report.daily_averages.len(), 7);
    assert_eq!(report.trend, Trend::Declining);
    assert_eq!(report.trend.as_str(), "declining");
}

#[test]
fn test_six_days_is_insufficient() {
    let report = aggregate(&history(&[&[1], &[2], &[3], &[4], &[5], &[5]]));
    assert_eq!(report.trend, Trend::InsufficientData);
    assert_eq!(report.trend.as_str(), "insufficient data");
}

#[test]
fn test_distribution_and_daily_means() {
    let entries = history(&[&[1, 3], &[3, 5]]);
    let report = aggregate(&entries);

    let expected: BTreeMap<u8, usize> = [(1, 1), (3, 2), (5, 1)].into_iter().collect();
    assert_eq!(report.distribution, expected);

    assert_eq!(report.daily_averages[0].date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
    assert_eq!(report.daily_averages[0].average, 2.0);
    assert_eq!(report.daily_averages[1].average, 4.0);
    assert_eq!(report.rolling_average, vec![2.0, 3.0]);
}

#[test]
fn test_leap_day_groups_separately() {
    let entries = history(&[&[2], &[2], &[2], &[4]]);
    let dates: Vec<_> = aggregate(&entries)
        .daily_averages
        .iter()
        .map(|d| d.date.to_string())
        .collect();
    assert_eq!(dates, vec!["2024-02-26", "2024-02-27", "2024-02-28", "2024-02-29"]);
}

#[test]
fn test_report_serializes() {
    let report = aggregate(&history(&[&[4]]));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["trend"], "insufficient data");
    assert_eq!(json["daily_averages"][0]["date"], "2024-02-26");
    assert_eq!(json["distribution"]["4"], 1);
}

#[test]
fn test_recent_entries_limit() {
    let entries = history(&[&[1, 2, 3], &[4, 5, 1]]);
    let recent = recent_entries(&entries, 5);
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].notes(), "day 1 #2");
    assert_eq!(recent[4].notes(), "day 0 #1");
}
