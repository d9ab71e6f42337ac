// src/sentiment/lexicon.rs
// Word tables for the lexicon scorer. Valences run from -4 (most negative) to +4.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("happy", 2.7),
    ("happier", 2.4),
    ("happiness", 2.6),
    ("glad", 2.0),
    ("joy", 2.8),
    ("joyful", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("liked", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("nice", 1.8),
    ("fine", 0.8),
    ("ok", 0.9),
    ("okay", 0.9),
    ("better", 1.9),
    ("best", 3.2),
    ("calm", 1.3),
    ("relaxed", 2.2),
    ("peaceful", 2.2),
    ("grateful", 2.0),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("proud", 2.1),
    ("confident", 2.2),
    ("safe", 1.9),
    ("fun", 2.3),
    ("smile", 1.5),
    ("smiling", 1.7),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("beautiful", 2.9),
    ("brilliant", 2.8),
    ("cheerful", 2.5),
    ("comfortable", 1.5),
    ("content", 1.5),
    ("delighted", 3.0),
    ("energized", 2.2),
    ("free", 2.3),
    ("friendly", 2.2),
    ("healthy", 1.7),
    ("helpful", 1.8),
    ("motivated", 1.6),
    ("optimistic", 1.3),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("productive", 1.6),
    ("rested", 1.3),
    ("satisfied", 1.8),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("supported", 1.9),
    ("win", 2.8),
    ("won", 2.7),
    ("yay", 2.4),
    ("perfect", 2.7),
    ("blessed", 2.9),
    ("care", 2.2),
    ("cared", 1.8),
    ("inspired", 2.2),
    ("lucky", 1.8),
    ("refreshed", 1.6),
    ("secure", 1.4),
    ("thrilled", 1.9),
    // negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("sad", -2.1),
    ("sadness", -1.9),
    ("unhappy", -1.8),
    ("miserable", -2.2),
    ("depressed", -2.3),
    ("depression", -2.7),
    ("down", -0.5),
    ("lonely", -2.0),
    ("alone", -1.0),
    ("anxious", -1.0),
    ("anxiety", -0.7),
    ("worried", -1.2),
    ("worry", -1.9),
    ("stressed", -1.4),
    ("stress", -1.8),
    ("nervous", -1.1),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("fear", -2.2),
    ("panic", -2.3),
    ("angry", -2.3),
    ("anger", -2.7),
    ("mad", -2.2),
    ("furious", -2.7),
    ("annoyed", -1.6),
    ("frustrated", -1.8),
    ("frustrating", -1.9),
    ("upset", -1.6),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hurt", -2.4),
    ("hurts", -2.1),
    ("pain", -2.3),
    ("painful", -2.1),
    ("cry", -2.1),
    ("crying", -2.1),
    ("cried", -1.6),
    ("tears", -0.9),
    ("tired", -1.9),
    ("exhausted", -1.5),
    ("sick", -2.3),
    ("ill", -1.8),
    ("broken", -2.0),
    ("lost", -1.3),
    ("hopeless", -2.0),
    ("helpless", -2.1),
    ("worthless", -2.4),
    ("useless", -1.8),
    ("failure", -2.3),
    ("failed", -2.3),
    ("fail", -2.5),
    ("guilty", -1.8),
    ("ashamed", -2.1),
    ("shame", -2.1),
    ("overwhelmed", -1.5),
    ("empty", -0.8),
    ("numb", -1.4),
    ("bored", -1.1),
    ("boring", -1.3),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("problem", -1.7),
    ("problems", -1.7),
    ("trouble", -1.7),
    ("difficult", -1.5),
    ("hard", -0.4),
    ("struggle", -1.3),
    ("struggling", -1.6),
    ("grief", -2.2),
    ("grieving", -2.3),
    ("heartbroken", -3.3),
    ("jealous", -2.0),
    ("lose", -1.3),
    ("losing", -1.6),
    ("kill", -3.7),
    ("die", -2.9),
    ("dead", -3.3),
    ("suicide", -3.5),
    ("suicidal", -3.6),
    ("insecure", -1.8),
    ("restless", -1.1),
    ("sorry", -0.3),
    ("ugh", -1.8),
    ("weak", -1.9),
    ("wrong", -2.1),
];

/// Words that intensify (positive value) or soften (negative value) the next sentiment word
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("such", 0.293),
    ("super", 0.293),
    ("too", 0.293),
    ("totally", 0.293),
    ("truly", 0.293),
    ("very", 0.293),
    ("most", 0.293),
    ("more", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("less", -0.293),
    ("little", -0.293),
    ("marginally", -0.293),
    ("occasionally", -0.293),
    ("partly", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
    ("sorta", -0.293),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt",
    "shouldnt", "couldnt", "hasnt", "havent", "hadnt", "aint", "without", "rarely", "seldom",
];

static VALENCE_MAP: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| VALENCES.iter().copied().collect());
static BOOSTER_MAP: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| BOOSTERS.iter().copied().collect());
static NEGATION_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| NEGATIONS.iter().copied().collect());

/// Valence for a lowercase word, if it carries sentiment
pub(crate) fn valence(word: &str) -> Option<f64> {
    VALENCE_MAP.get(word).copied()
}

/// Booster scalar for a lowercase word
pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTER_MAP.get(word).copied()
}

/// True for negation words, including any contraction ending in "n't"
pub(crate) fn is_negation(word: &str) -> bool {
    NEGATION_SET.contains(word) || word.ends_with("n't") || word.ends_with("n’t")
}
