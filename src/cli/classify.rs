// src/cli/classify.rs
// One-shot sentiment classification

use anyhow::Result;
use mindful::sentiment::SentimentResult;
use mindful::state::AppState;

pub async fn run_classify(state: &AppState, text: &str, json: bool) -> Result<()> {
    let result = state.sentiment.classify(text).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_result(&result));
    }
    Ok(())
}

pub fn format_result(result: &SentimentResult) -> String {
    format!(
        "Sentiment: {} ({}/5), confidence {:.2} via {}",
        result.label(),
        result.score(),
        result.confidence(),
        result.source()
    )
}
