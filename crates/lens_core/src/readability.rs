//! Flesch Reading Ease scoring with a vowel-group syllable heuristic.

use crate::stats::{round2, sentences, words};
use serde::{Deserialize, Serialize};

/// Descriptive reading level derived from the Flesch score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLevel {
    #[serde(rename = "very easy")]
    VeryEasy,
    #[serde(rename = "easy")]
    Easy,
    #[serde(rename = "fairly easy")]
    FairlyEasy,
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "fairly difficult")]
    FairlyDifficult,
    #[serde(rename = "difficult")]
    Difficult,
    #[serde(rename = "very difficult")]
    VeryDifficult,
    /// Degenerate input: no words or no sentences
    #[serde(rename = "unreadable")]
    Unreadable,
}

impl ReadingLevel {
    /// Bucket a Flesch score into its descriptive band
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::VeryEasy
        } else if score >= 80.0 {
            Self::Easy
        } else if score >= 70.0 {
            Self::FairlyEasy
        } else if score >= 60.0 {
            Self::Standard
        } else if score >= 50.0 {
            Self::FairlyDifficult
        } else if score >= 30.0 {
            Self::Difficult
        } else {
            Self::VeryDifficult
        }
    }
}

/// Readability metrics for a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub flesch_score: f64,
    pub reading_level: ReadingLevel,
    pub avg_sentence_length: f64,
    pub avg_syllables_per_word: f64,
}

/// Compute the Flesch Reading Ease score for a text.
///
/// Degenerate input (no words or no sentences) yields a zeroed report
/// with the `Unreadable` level instead of dividing by zero.
pub fn calculate(text: &str) -> ReadabilityReport {
    let word_count = words(text).count();
    let sentence_count = sentences(text).count();

    if sentence_count == 0 || word_count == 0 {
        return ReadabilityReport {
            flesch_score: 0.0,
            reading_level: ReadingLevel::Unreadable,
            avg_sentence_length: 0.0,
            avg_syllables_per_word: 0.0,
        };
    }

    let syllable_count: usize = words(text).map(count_syllables).sum();

    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;

    let flesch_score = 206.835 - (1.015 * avg_sentence_length) - (84.6 * avg_syllables_per_word);

    ReadabilityReport {
        flesch_score: round2(flesch_score),
        reading_level: ReadingLevel::from_score(flesch_score),
        avg_sentence_length: round2(avg_sentence_length),
        avg_syllables_per_word: round2(avg_syllables_per_word),
    }
}

/// Vowel-letter heuristic: every word has at least one syllable
fn count_syllables(word: &str) -> usize {
    let vowels = word
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count();
    vowels.max(1)
}
