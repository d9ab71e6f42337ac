// src/sentiment/polarity.rs
// Lexicon-based compound polarity and the primary classifier built on it

use super::lexicon::{booster, is_negation, valence};
use super::{Classifier, MAX_SCORE, MIN_SCORE, SentimentResult, SentimentSource};
use crate::error::{MindfulError, Result};
use async_trait::async_trait;

/// Valence shift for an ALL-CAPS sentiment word in mixed-case text
const CAPS_INCR: f64 = 0.733;
/// Negated words flip and lose some intensity
const NEGATION_SCALAR: f64 = -0.74;
/// Booster influence by distance (1, 2, 3 tokens back)
const BOOSTER_DAMPING: [f64; 3] = [1.0, 0.95, 0.9];
/// How many preceding tokens are checked for boosters and negations
const LOOKBACK: usize = 3;
const BUT_BEFORE: f64 = 0.5;
const BUT_AFTER: f64 = 1.5;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// Normalization constant: approximates the maximum expected raw sum
const NORMALIZE_ALPHA: f64 = 15.0;

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn is_shouting(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_INCR + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Compound polarity in [-1, 1]; 0.0 when the text has no sentiment words
pub fn compound_polarity(text: &str) -> f64 {
    let tokens = tokenize(text);
    let shouting: Vec<bool> = tokens.iter().map(|t| is_shouting(t.raw)).collect();
    // Caps only signal emphasis when the rest of the text is not shouted too
    let caps_differ = shouting.iter().any(|s| *s) && shouting.iter().any(|s| !*s);

    let mut sentiments = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let Some(mut v) = valence(&token.lower) else {
            sentiments.push(0.0);
            continue;
        };

        if caps_differ && shouting[i] {
            v += CAPS_INCR.copysign(v);
        }

        let mut negated = false;
        for dist in 0..LOOKBACK.min(i) {
            let j = i - dist - 1;
            let prev = &tokens[j];
            if let Some(b) = booster(&prev.lower) {
                let mut scalar = if v < 0.0 { -b } else { b };
                if caps_differ && shouting[j] {
                    scalar += CAPS_INCR.copysign(scalar);
                }
                v += scalar * BOOSTER_DAMPING[dist];
            }
            negated |= is_negation(&prev.lower);
        }
        if negated {
            v *= NEGATION_SCALAR;
        }

        sentiments.push(v);
    }

    if let Some(but_idx) = tokens.iter().position(|t| t.lower == "but") {
        for (i, s) in sentiments.iter_mut().enumerate() {
            if i < but_idx {
                *s *= BUT_BEFORE;
            } else if i > but_idx {
                *s *= BUT_AFTER;
            }
        }
    }

    let sum: f64 = sentiments.iter().sum();
    if sum == 0.0 {
        return 0.0;
    }
    let emphasis = punctuation_emphasis(text);
    normalize(sum + emphasis.copysign(sum))
}

/// Map compound polarity onto the 1..=5 scale. Ties round to even so that
/// a compound of exactly 0.0 lands on 3.
pub fn score_from_compound(compound: f64) -> u8 {
    let raw = ((compound + 1.0) * 2.5).round_ties_even() as i64 + 1;
    raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8
}

/// Primary strategy: fixed lexicon, no network
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> Result<SentimentResult> {
        let compound = compound_polarity(text);
        if !compound.is_finite() {
            return Err(MindfulError::Classification(format!(
                "non-finite polarity {}",
                compound
            )));
        }
        Ok(SentimentResult::from_score(
            score_from_compound(compound) as i64,
            compound.abs(),
            SentimentSource::Lexicon,
        ))
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult> {
        self.score(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{LABEL_HAPPY, LABEL_NEUTRAL, LABEL_SAD};

    // ============================================================================
    // Compound polarity
    // ============================================================================

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(compound_polarity(""), 0.0);
        assert_eq!(compound_polarity("   \n\t"), 0.0);
        assert_eq!(compound_polarity("!!!???"), 0.0);
    }

    #[test]
    fn test_no_sentiment_words_is_zero() {
        assert_eq!(compound_polarity("The table is brown."), 0.0);
    }

    #[test]
    fn test_positive_text() {
        assert!(compound_polarity("I am so happy today, everything is wonderful!") > 0.5);
    }

    #[test]
    fn test_negative_text() {
        assert!(compound_polarity("I feel terrible and lonely") < -0.5);
    }

    #[test]
    fn test_negation_flips() {
        assert!(compound_polarity("I am happy") > 0.0);
        assert!(compound_polarity("I am not happy") < 0.0);
        assert!(compound_polarity("I don't feel good") < 0.0);
    }

    #[test]
    fn test_booster_intensifies() {
        assert!(compound_polarity("very good") > compound_polarity("good"));
        assert!(compound_polarity("very bad") < compound_polarity("bad"));
    }

    #[test]
    fn test_dampener_softens() {
        assert!(compound_polarity("slightly sad") > compound_polarity("sad"));
    }

    #[test]
    fn test_caps_emphasis() {
        assert!(compound_polarity("I feel GREAT today") > compound_polarity("I feel great today"));
    }

    #[test]
    fn test_all_caps_text_has_no_caps_bonus() {
        assert_eq!(compound_polarity("FEEL GREAT"), compound_polarity("feel great"));
    }

    #[test]
    fn test_but_shifts_weight() {
        assert!(compound_polarity("The food was great but the service was terrible") < 0.0);
    }

    #[test]
    fn test_exclamation_amplifies() {
        assert!(compound_polarity("good!!!") > compound_polarity("good"));
        assert!(compound_polarity("bad!!!") < compound_polarity("bad"));
    }

    #[test]
    fn test_always_bounded() {
        let long_negative = "awful ".repeat(200);
        let shouted = "HATE hate KILL!!!!!!!! ?????";
        for text in [long_negative.as_str(), shouted, "LOVE love best!!!!!!!"] {
            let c = compound_polarity(text);
            assert!((-1.0..=1.0).contains(&c), "{} -> {}", text, c);
        }
    }

    // ============================================================================
    // Score mapping
    // ============================================================================

    #[test]
    fn test_score_from_compound() {
        assert_eq!(score_from_compound(-1.0), 1);
        assert_eq!(score_from_compound(-0.6), 2);
        assert_eq!(score_from_compound(-0.2), 3);
        assert_eq!(score_from_compound(0.0), 3);
        assert_eq!(score_from_compound(0.2), 4);
        assert_eq!(score_from_compound(0.6), 5);
        assert_eq!(score_from_compound(1.0), 5);
    }

    // ============================================================================
    // LexiconClassifier
    // ============================================================================

    #[tokio::test]
    async fn test_classify_empty_is_neutral() {
        let result = LexiconClassifier::new().classify("").await.unwrap();
        assert_eq!(result.score(), 3);
        assert_eq!(result.label(), LABEL_NEUTRAL);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.source(), SentimentSource::Lexicon);
    }

    #[tokio::test]
    async fn test_classify_happy() {
        let result = LexiconClassifier::new()
            .classify("I love this, what a wonderful day!")
            .await
            .unwrap();
        assert!(result.score() >= 4);
        assert_eq!(result.label(), LABEL_HAPPY);
        assert!(result.confidence() > 0.5);
    }

    #[tokio::test]
    async fn test_classify_sad() {
        let result = LexiconClassifier::new()
            .classify("I feel hopeless and so alone")
            .await
            .unwrap();
        assert!(result.score() <= 2);
        assert_eq!(result.label(), LABEL_SAD);
    }
}
