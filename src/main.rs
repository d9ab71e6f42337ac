// src/main.rs
// mindful - sentiment-aware mood journal

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use mindful::config::{EnvConfig, MindfulConfig};
use mindful::state::AppState;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn log_level(verbose: u8, env: &EnvConfig) -> Level {
    match verbose {
        0 => env.log_level.unwrap_or(Level::WARN),
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Global .env first, then the working directory
    let _ = dotenvy::from_path(MindfulConfig::config_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let env = EnvConfig::load();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose, &env))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = AppState::load(env, cli.data_file.as_deref())?;
    debug!(data_file = %state.store.path().display(), "Starting");

    match cli.command {
        Commands::Classify { text, json } => cli::run_classify(&state, &text, json).await?,
        Commands::Log {
            score,
            label,
            notes,
        } => cli::run_log(&state, score, label, notes)?,
        Commands::History { json } => cli::run_history(&state, json)?,
        Commands::Report => cli::run_report(&state)?,
        Commands::Reset { yes } => cli::run_reset(&state, yes)?,
        Commands::Chat { log_mood } => cli::run_chat(&state, log_mood).await?,
        Commands::Config => cli::run_config(&state)?,
    }

    Ok(())
}
