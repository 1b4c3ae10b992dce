//! Keyword extraction by stop-word-filtered frequency counting.

use lens_common::{LensError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from",
        "up", "about", "into", "through", "during", "before", "after", "above", "below",
        "between", "among", "is", "was", "are", "were", "been", "be", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can",
        "this", "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "me",
        "him", "her", "us", "them", "my", "your", "his", "its", "our", "their", "a", "an",
        "as", "if", "each", "how", "which", "who", "when", "where", "why", "what",
    ]
    .into_iter()
    .collect()
});

/// A keyword and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub keyword: String,
    pub frequency: usize,
}

/// Extract the top `limit` keywords from `text`.
///
/// Tokens are lower-cased alphabetic runs of at least `min_len` characters;
/// stop words are discarded. Results are sorted by frequency descending,
/// ties broken by order of first appearance. `limit == 0` is rejected.
pub fn extract(text: &str, limit: usize, min_len: usize) -> Result<Vec<Keyword>> {
    if limit == 0 {
        return Err(LensError::InvalidArgument(
            "limit must be a positive integer".to_string(),
        ));
    }

    let lowered = text.to_lowercase();

    // (count, first-seen index) per token
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut next_seen = 0usize;

    for m in KEYWORD_RE.find_iter(&lowered) {
        let word = m.as_str();
        if word.len() < min_len || STOP_WORDS.contains(word) {
            continue;
        }
        match counts.entry(word) {
            Entry::Occupied(mut e) => e.get_mut().0 += 1,
            Entry::Vacant(e) => {
                e.insert((1, next_seen));
                next_seen += 1;
            }
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    Ok(ranked
        .into_iter()
        .take(limit)
        .map(|(word, count, _)| Keyword {
            keyword: word.to_string(),
            frequency: count,
        })
        .collect())
}
