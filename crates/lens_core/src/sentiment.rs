//! Lexicon-based sentiment scoring.
//!
//! Each lexicon entry carries a score in [-5, 5]. Polarity is the sum of
//! matched scores normalized into [-1, 1]; subjectivity is the fraction of
//! tokens carrying any sentiment at all, in [0, 1].

use crate::stats::round3;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

static LEXICON: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<HashMap<String, i32>>(raw).expect("valid sentiment lexicon")
});

/// Maximum absolute lexicon score, used for polarity normalization
const MAX_WORD_SCORE: f64 = 5.0;

/// Polarity threshold above which text is labeled positive (below the
/// negation it is negative)
const POLARITY_THRESHOLD: f64 = 0.1;

/// Categorical sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Bucket a polarity score by the fixed thresholds
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POLARITY_THRESHOLD {
            Self::Positive
        } else if polarity < -POLARITY_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Sentiment scores for a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Score the sentiment of a text. Pure and deterministic; empty text yields
/// a neutral zero report, never an error.
pub fn analyze(text: &str) -> SentimentReport {
    let tokens: Vec<String> = tokenize(text).collect();

    let mut score_sum: i32 = 0;
    let mut scored_words: usize = 0;

    for i in 0..tokens.len() {
        let base = word_score(tokens[i].as_str());
        if base == 0 {
            continue;
        }

        // A negator within the three preceding tokens inverts the sign
        let negated = (1..=3).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
        score_sum += if negated { -base } else { base };
        scored_words += 1;
    }

    let polarity = if scored_words > 0 {
        (score_sum as f64 / (MAX_WORD_SCORE * scored_words as f64)).clamp(-1.0, 1.0)
    } else {
        0.0
    };

    let subjectivity = if tokens.is_empty() {
        0.0
    } else {
        (scored_words as f64 / tokens.len() as f64).clamp(0.0, 1.0)
    };

    SentimentReport {
        sentiment: SentimentLabel::from_polarity(polarity),
        polarity: round3(polarity),
        subjectivity: round3(subjectivity),
    }
}

#[inline]
fn word_score(w: &str) -> i32 {
    *LEXICON.get(w).unwrap_or(&0)
}

/// Alphanumeric tokens, lower-cased
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not" | "no" | "never" | "isn" | "wasn" | "aren" | "doesn" | "didn" | "cannot" | "without"
    )
}
