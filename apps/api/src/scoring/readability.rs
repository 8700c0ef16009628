//! Readability: Flesch Reading Ease, capped, then bucketed into a level.
//!
//! Formula: `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! Higher = easier. The score is capped (default 50) because for ATS purposes
//! "very easy" is not a differentiator; only the difficulty tail matters.
//! There is no lower clamp: very dense text scores below zero.

use serde::{Serialize, Serializer};

use crate::scoring::text_stats::{lexicon_count, sentence_count, total_syllables};

/// Categorical reading level derived from a (capped) readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityLevel {
    /// [50, 100)
    EasyToRead,
    /// [30, 50)
    College,
    /// [10, 30)
    CollegeGraduate,
    /// [0, 10)
    Professional,
    /// Outside every band (negative scores). A valid outcome, not an error.
    Unclassified,
}

impl ReadabilityLevel {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if (50.0..100.0).contains(&s) => ReadabilityLevel::EasyToRead,
            s if (30.0..50.0).contains(&s) => ReadabilityLevel::College,
            s if (10.0..30.0).contains(&s) => ReadabilityLevel::CollegeGraduate,
            s if (0.0..10.0).contains(&s) => ReadabilityLevel::Professional,
            _ => ReadabilityLevel::Unclassified,
        }
    }

    /// Display label; `None` for `Unclassified`.
    pub fn label(self) -> Option<&'static str> {
        match self {
            ReadabilityLevel::EasyToRead => Some("Easy to read"),
            ReadabilityLevel::College => Some("College"),
            ReadabilityLevel::CollegeGraduate => Some("College Graduate"),
            ReadabilityLevel::Professional => Some("Professional"),
            ReadabilityLevel::Unclassified => None,
        }
    }
}

// Unclassified serializes as null in the flat report.
impl Serialize for ReadabilityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.label() {
            Some(label) => serializer.serialize_str(label),
            None => serializer.serialize_none(),
        }
    }
}

/// Uncapped Flesch Reading Ease, rounded to two decimals.
/// A zero word or sentence count contributes a zero ratio.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words = f64::from(lexicon_count(text));
    let sentences = f64::from(sentence_count(text));
    let syllables = f64::from(total_syllables(text));

    let words_per_sentence = if sentences > 0.0 {
        words / sentences
    } else {
        0.0
    };
    let syllables_per_word = if words > 0.0 { syllables / words } else { 0.0 };

    let raw = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    (raw * 100.0).round() / 100.0
}

/// `min(ceiling, flesch_reading_ease(text))`.
pub fn readability_score(text: &str, ceiling: f64) -> f64 {
    flesch_reading_ease(text).min(ceiling)
}
