// src/cli/mod.rs
// Command-line interface for mindful

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod chat;
pub mod classify;
pub mod config;
pub mod mood;

pub use chat::run_chat;
pub use classify::run_classify;
pub use config::run_config;
pub use mood::{run_history, run_log, run_report, run_reset};

#[derive(Parser)]
#[command(name = "mindful")]
#[command(about = "Sentiment-aware mood journal and wellness companion")]
#[command(version)]
pub struct Cli {
    /// Mood log file (overrides MINDFUL_DATA_FILE and config.toml)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score the sentiment of a piece of text
    Classify {
        /// Text to classify
        #[arg(index = 1)]
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a mood
    Log {
        /// Mood from 1 (very sad) to 5 (very happy)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        score: u8,

        /// Label (default: the mood level's name)
        #[arg(short, long)]
        label: Option<String>,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// List every logged mood
    History {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Daily averages, trend, distribution and recent entries
    Report,

    /// Delete all mood data
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Talk with the companion (one message per line, "quit" to leave)
    Chat {
        /// Log the mood of the first message of the session
        #[arg(long)]
        log_mood: bool,
    },

    /// Show resolved configuration and check it
    Config,
}
