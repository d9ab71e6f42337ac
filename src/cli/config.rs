// src/cli/config.rs
// Print resolved configuration and validation results

use anyhow::Result;
use mindful::state::AppState;

pub fn run_config(state: &AppState) -> Result<()> {
    let model = state
        .config
        .llm
        .model
        .clone()
        .unwrap_or_else(|| state.provider.default_model().to_string());

    println!("Provider:    {} ({})", state.provider.display_name(), model);
    println!("API keys:    {}", state.api_keys().summary());
    println!(
        "Timeout:     {}s, {} retr{}",
        state.config.llm.timeout_secs,
        state.config.llm.max_retries,
        if state.config.llm.max_retries == 1 { "y" } else { "ies" }
    );
    println!("Classifiers: {}", state.sentiment.strategy_names().join(" -> "));
    println!("Mood log:    {}", state.store.path().display());
    println!(
        "Log level:   {}",
        state.env.log_level.map_or_else(|| "default".to_string(), |l| l.to_string())
    );
    println!();

    let validation = state.validate();
    println!("{}", validation.report());
    if !validation.is_valid() {
        anyhow::bail!("configuration has errors");
    }
    Ok(())
}
