// src/sentiment/remote.rs
// Fallback classifier: asks a language model to rate the text and parses its reply

use super::{
    Classifier, LABEL_HAPPY, LABEL_NEUTRAL, LABEL_SAD, SentimentResult, SentimentSource,
};
use crate::error::{MindfulError, Result};
use crate::llm::{LlmClient, Message};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

const PROMPT_TEMPLATE: &str = "Analyze the sentiment of the following text. Rate it on a scale of 1 to 5, where:
1 = Very negative
2 = Negative
3 = Neutral
4 = Positive
5 = Very positive

Also provide a confidence score between 0 and 1, and one of these labels: happy, neutral, sad.

Text to analyze: \"{text}\"

Respond with this format (no need for JSON):
Sentiment score: [number 1-5]
Sentiment label: [happy/neutral/sad]
Confidence: [number between 0-1]";

static SCORE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sentiment score:\s*(\d+)").expect("valid regex"));
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)sentiment label:\s*(\w+)").expect("valid regex"));
static CONFIDENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)confidence:\s*([01](?:\.\d+)?)").expect("valid regex"));

/// JSON reply shape some providers produce when asked for structured output
#[derive(Debug, Deserialize)]
struct JsonReply {
    sentiment_score: i64,
    #[serde(default)]
    sentiment_label: String,
    confidence: f64,
}

/// Build the rating prompt for `text`
pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replace("{text}", text)
}

/// Turn a model reply into a result. Never fails: an unparseable reply
/// degrades to a keyword heuristic.
pub fn parse_reply(reply: &str) -> SentimentResult {
    if let Some(result) = parse_json(reply) {
        return result;
    }
    if let Some(result) = parse_lines(reply) {
        return result;
    }
    debug!("Sentiment reply not in expected format, using keyword heuristic");
    heuristic(reply)
}

fn parse_json(reply: &str) -> Option<SentimentResult> {
    // Models like to wrap JSON in code fences
    let trimmed = reply
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let parsed: JsonReply = serde_json::from_str(trimmed).ok()?;
    Some(SentimentResult::new(
        parsed.sentiment_score,
        parsed.sentiment_label,
        parsed.confidence,
        SentimentSource::Remote,
    ))
}

fn parse_lines(reply: &str) -> Option<SentimentResult> {
    let score = SCORE_RE
        .captures(reply)?
        .get(1)?
        .as_str()
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    let label = LABEL_RE.captures(reply)?.get(1)?.as_str().to_string();
    let confidence = CONFIDENCE_RE
        .captures(reply)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()?;
    Some(SentimentResult::new(
        score,
        label,
        confidence,
        SentimentSource::Remote,
    ))
}

fn heuristic(reply: &str) -> SentimentResult {
    let lower = reply.to_lowercase();
    if lower.contains("positive") {
        SentimentResult::new(4, LABEL_HAPPY, 0.7, SentimentSource::Remote)
    } else if lower.contains("negative") {
        SentimentResult::new(2, LABEL_SAD, 0.7, SentimentSource::Remote)
    } else {
        SentimentResult::new(3, LABEL_NEUTRAL, 0.5, SentimentSource::Remote)
    }
}

/// Classifier backed by a remote language model
pub struct RemoteClassifier {
    client: Arc<dyn LlmClient>,
}

impl RemoteClassifier {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult> {
        let messages = vec![Message::user(build_prompt(text))];
        let reply = self.client.chat(messages).await.map_err(|e| {
            warn!(
                provider = %self.client.provider_type(),
                error = %e,
                "Remote sentiment request failed"
            );
            MindfulError::Llm(e.to_string())
        })?;

        let content = reply
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| MindfulError::Llm("empty sentiment reply".to_string()))?;

        let result = parse_reply(&content);
        debug!(
            request_id = %reply.request_id,
            score = result.score(),
            label = %result.label(),
            "Remote sentiment parsed"
        );
        Ok(result)
    }
}
