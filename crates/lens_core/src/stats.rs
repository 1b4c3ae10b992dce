//! Basic text statistics: character, word, sentence and paragraph counts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());
static SENTENCE_BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Basic statistics computed from a text body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    pub character_count: usize,
    pub character_count_no_spaces: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub avg_words_per_sentence: f64,
}

/// Compute basic statistics for a text
pub fn basic_stats(text: &str) -> TextStats {
    let character_count = text.chars().count();
    let character_count_no_spaces = text.chars().filter(|c| *c != ' ').count();

    let word_count = words(text).count();
    let sentence_count = sentences(text).count();
    let paragraph_count = paragraphs(text).count();

    let avg_words_per_sentence = if sentence_count > 0 {
        round2(word_count as f64 / sentence_count as f64)
    } else {
        0.0
    };

    TextStats {
        character_count,
        character_count_no_spaces,
        word_count,
        sentence_count,
        paragraph_count,
        avg_words_per_sentence,
    }
}

/// Iterate over word tokens (alphanumeric runs)
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Iterate over sentences: split on runs of `.!?`, dropping blank fragments
pub(crate) fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_BOUNDARY_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Iterate over paragraphs (blocks separated by blank lines)
pub(crate) fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

/// Round to two decimal places
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to three decimal places
pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
