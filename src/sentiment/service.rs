// src/sentiment/service.rs
// Runs the classification strategies in order and always produces a result

use super::{Classifier, LexiconClassifier, RemoteClassifier, SentimentResult};
use crate::config::SentimentConfig;
use crate::llm::LlmClient;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Ordered strategy chain: first `Ok` wins, neutral default when all fail
#[derive(Clone)]
pub struct SentimentService {
    strategies: Vec<Arc<dyn Classifier>>,
}

impl SentimentService {
    pub fn new(strategies: Vec<Arc<dyn Classifier>>) -> Self {
        Self { strategies }
    }

    /// Lexicon first, remote second when a client is available
    pub fn from_config(config: &SentimentConfig, remote: Option<Arc<dyn LlmClient>>) -> Self {
        let mut strategies: Vec<Arc<dyn Classifier>> = Vec::new();
        if config.lexicon_enabled {
            strategies.push(Arc::new(LexiconClassifier::new()));
        }
        if config.remote_enabled
            && let Some(client) = remote
        {
            strategies.push(Arc::new(RemoteClassifier::new(client)));
        }

        let names: Vec<&str> = strategies.iter().map(|s| s.name()).collect();
        info!(strategies = ?names, "Sentiment service ready");
        Self::new(strategies)
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Classify `text`. Never fails.
    pub async fn classify(&self, text: &str) -> SentimentResult {
        for strategy in &self.strategies {
            let start = Instant::now();
            match strategy.classify(text).await {
                Ok(result) => {
                    debug!(
                        strategy = strategy.name(),
                        score = result.score(),
                        label = %result.label(),
                        confidence = result.confidence(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Text classified"
                    );
                    return result;
                }
                Err(e) => {
                    warn!(strategy = strategy.name(), error = %e, "Classifier failed, trying next");
                }
            }
        }

        debug!("No classifier produced a result, using neutral default");
        SentimentResult::neutral_default()
    }
}
