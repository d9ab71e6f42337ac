// src/sentiment/mod.rs
// Sentiment classification: lexicon scorer, remote fallback, and the chain that runs them

mod lexicon;
pub mod polarity;
pub mod remote;
pub mod service;

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

pub use polarity::{LexiconClassifier, compound_polarity, score_from_compound};
pub use remote::{RemoteClassifier, parse_reply};
pub use service::SentimentService;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// Confidence reserved for the "no real signal" default
pub const DEFAULT_CONFIDENCE: f64 = 0.1;

pub const LABEL_HAPPY: &str = "happy";
pub const LABEL_NEUTRAL: &str = "neutral";
pub const LABEL_SAD: &str = "sad";

/// Which strategy produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentSource {
    Lexicon,
    Remote,
    Default,
}

impl fmt::Display for SentimentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexicon => write!(f, "lexicon"),
            Self::Remote => write!(f, "remote"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Normalized classification result.
///
/// Fields are private so every instance goes through [`SentimentResult::new`],
/// which clamps `score` into 1..=5 and `confidence` into 0.0..=1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    score: u8,
    label: String,
    confidence: f64,
    source: SentimentSource,
}

impl SentimentResult {
    pub fn new(score: i64, label: impl Into<String>, confidence: f64, source: SentimentSource) -> Self {
        let score = score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8;
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        let label = label.into().trim().to_lowercase();
        let label = if label.is_empty() {
            label_for_score(score).to_string()
        } else {
            label
        };

        Self {
            score,
            label,
            confidence,
            source,
        }
    }

    /// Build a result whose label follows the score thresholds
    pub fn from_score(score: i64, confidence: f64, source: SentimentSource) -> Self {
        let clamped = score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8;
        Self::new(score, label_for_score(clamped), confidence, source)
    }

    /// Score 3, "neutral", confidence 0.1
    pub fn neutral_default() -> Self {
        Self::new(3, LABEL_NEUTRAL, DEFAULT_CONFIDENCE, SentimentSource::Default)
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn source(&self) -> SentimentSource {
        self.source
    }

    /// Strongly negative with high confidence
    pub fn is_distressed(&self) -> bool {
        self.score <= 2 && self.confidence > 0.7
    }
}

/// `>= 4` happy, `3` neutral, otherwise sad
pub fn label_for_score(score: u8) -> &'static str {
    match score {
        s if s >= 4 => LABEL_HAPPY,
        3 => LABEL_NEUTRAL,
        _ => LABEL_SAD,
    }
}

/// One strategy in the classification chain
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    async fn classify(&self, text: &str) -> Result<SentimentResult>;
}
