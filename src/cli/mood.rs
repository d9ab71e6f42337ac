// src/cli/mood.rs
// Mood log commands: log, history, report, reset

use anyhow::Result;
use mindful::mood::report::RECENT_ENTRIES;
use mindful::mood::{MoodEntry, MoodLevel, MoodReport, aggregate, recent_entries};
use mindful::state::AppState;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

const NOTES_WIDTH: usize = 40;

pub fn run_log(state: &AppState, score: u8, label: Option<String>, notes: String) -> Result<()> {
    let level = MoodLevel::from_score(score as i64);
    let entry = MoodEntry::now(
        score as i64,
        label.unwrap_or_else(|| level.label().to_string()),
        notes,
    );
    state.store.append(&entry)?;
    println!("Mood saved: {} ({}/5)", entry.mood_label(), entry.mood_score());
    Ok(())
}

pub fn run_history(state: &AppState, json: bool) -> Result<()> {
    let entries = state.store.read_all();
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("No mood history yet. Start logging to see patterns.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {}  {:<10}  {}",
            entry.timestamp().format(mindful::mood::TIMESTAMP_FORMAT),
            entry.mood_score(),
            entry.mood_label(),
            entry.notes()
        );
    }
    Ok(())
}

pub fn run_report(state: &AppState) -> Result<()> {
    let entries = state.store.read_all();
    if entries.is_empty() {
        println!("No mood history yet. Start logging to see patterns.");
        return Ok(());
    }
    let report = aggregate(&entries);
    print!("{}", render_report(&report, &entries));
    Ok(())
}

pub fn run_reset(state: &AppState, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Delete all mood data in {}? [y/N] ",
            state.store.path().display()
        );
        std::io::stdout().flush()?;
        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Nothing deleted.");
            return Ok(());
        }
    }
    state.store.reset()?;
    println!("All mood data cleared.");
    Ok(())
}

/// Plain-text rendering of the mood report
pub fn render_report(report: &MoodReport, entries: &[MoodEntry]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Your Mood History");
    let _ = writeln!(out, "{:<12} {:>7} {:>11} {:>7}", "Date", "Average", "3-day avg", "Entries");
    for (day, rolling) in report.daily_averages.iter().zip(&report.rolling_average) {
        let _ = writeln!(
            out,
            "{:<12} {:>7.2} {:>11.2} {:>7}",
            day.date.format(mindful::mood::DATE_FORMAT),
            day.average,
            rolling,
            day.count
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Trend: {}", report.trend);
    let _ = writeln!(out, "{}", report.trend.describe());

    let _ = writeln!(out);
    let _ = writeln!(out, "Mood Distribution");
    for level in MoodLevel::ALL.iter().rev() {
        let count = report.distribution.get(&level.score()).copied().unwrap_or(0);
        let _ = writeln!(out, "{:<11} {:>3} {}", level.display_name(), count, "#".repeat(count));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recent Entries");
    for entry in recent_entries(entries, RECENT_ENTRIES) {
        let _ = writeln!(
            out,
            "{}  {:<10}  {}",
            entry.date().format(mindful::mood::DATE_FORMAT),
            entry.mood_label(),
            truncate(entry.notes(), NOTES_WIDTH)
        );
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= width {
        flat
    } else {
        let cut: String = flat.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
