//! Keyword Stuffing Detector.
//!
//! Algorithm, per bucket (general keywords, category keywords):
//! 1. Count exact whitespace-split tokens (no case or punctuation folding).
//! 2. frequency = occurrences / lexicon_count(text)
//! 3. normalized = min(frequency / threshold, 1.0)
//! 4. penalty = Σ normalized over the terms that `StuffingRule` lets through
//!
//! The total is the punctuation-aware lexical count while per-term counts are
//! exact token matches, so "Rust," does not count toward "Rust".

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use crate::scoring::config::StuffingConfig;
use crate::scoring::text_stats::lexicon_count;
use crate::scoring::ScoringError;

/// Which terms contribute to the penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StuffingRule {
    /// The normalized (already capped at 1.0) value is compared against the
    /// threshold. Any term present at all in a resume of at most
    /// 400 words qualifies.
    #[default]
    NormalizedAtThreshold,
    /// The raw frequency is compared against the threshold.
    RawFrequencyAtThreshold,
}

impl StuffingRule {
    pub fn qualifies(self, frequency: f64, normalized: f64, threshold: f64) -> bool {
        match self {
            StuffingRule::NormalizedAtThreshold => normalized >= threshold,
            StuffingRule::RawFrequencyAtThreshold => frequency >= threshold,
        }
    }
}

impl FromStr for StuffingRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalized" | "normalized_at_threshold" => Ok(StuffingRule::NormalizedAtThreshold),
            "raw" | "raw_frequency_at_threshold" => Ok(StuffingRule::RawFrequencyAtThreshold),
            other => Err(format!(
                "unknown stuffing rule '{other}' (expected 'normalized' or 'raw')"
            )),
        }
    }
}

/// Penalties for the two keyword buckets. Each fails on its own, so an empty
/// category list still scores when the general list cannot.
#[derive(Debug, Clone, PartialEq)]
pub struct StuffingPenalty {
    pub keyword: Result<f64, ScoringError>,
    pub category: Result<f64, ScoringError>,
}

/// Token counts for one resume text, reusable across keyword buckets.
struct StuffingDetector<'a> {
    token_counts: HashMap<&'a str, u32>,
    total_words: u32,
    config: &'a StuffingConfig,
}

impl<'a> StuffingDetector<'a> {
    fn new(text: &'a str, config: &'a StuffingConfig) -> Self {
        let mut token_counts: HashMap<&str, u32> = HashMap::new();
        for token in text.split_whitespace() {
            *token_counts.entry(token).or_insert(0) += 1;
        }
        Self {
            token_counts,
            total_words: lexicon_count(text),
            config,
        }
    }

    /// Raw frequency and normalized density (capped at 1.0) of one term.
    fn term_density(&self, term: &str) -> (f64, f64) {
        let occurrences = self.token_counts.get(term).copied().unwrap_or(0);
        let frequency = f64::from(occurrences) / f64::from(self.total_words);
        let normalized = (frequency / self.config.threshold).min(1.0);
        (frequency, normalized)
    }

    /// Penalty for one bucket of terms. Duplicate terms count once.
    fn penalty(&self, terms: &[String]) -> Result<f64, ScoringError> {
        let unique: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
        if unique.is_empty() {
            return Ok(0.0);
        }
        if self.total_words == 0 {
            return Err(ScoringError::InvalidDenominator {
                quantity: "word_count",
            });
        }

        let threshold = self.config.threshold;
        Ok(unique
            .into_iter()
            .map(|term| self.term_density(term))
            .filter(|&(frequency, normalized)| {
                self.config.rule.qualifies(frequency, normalized, threshold)
            })
            .map(|(_, normalized)| normalized)
            .sum())
    }
}

/// Both stuffing penalties for a resume text.
pub fn stuffing_penalty(
    text: &str,
    keywords: &[String],
    category_keywords: &[String],
    config: &StuffingConfig,
) -> StuffingPenalty {
    let detector = StuffingDetector::new(text, config);
    StuffingPenalty {
        keyword: detector.penalty(keywords),
        category: detector.penalty(category_keywords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// `filler` words of padding plus the given tokens.
    fn text_with(tokens: &[&str], filler: usize) -> String {
        let mut words: Vec<&str> = tokens.to_vec();
        words.extend(std::iter::repeat("word").take(filler));
        words.join(" ")
    }

    #[test]
    fn test_empty_keyword_sets_have_zero_penalty() {
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty("Built APIs in Rust.", &[], &[], &config);
        assert_eq!(penalty.keyword, Ok(0.0));
        assert_eq!(penalty.category, Ok(0.0));
    }

    #[test]
    fn test_empty_keyword_sets_on_empty_text_are_not_an_error() {
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty("", &[], &[], &config);
        assert_eq!(penalty.keyword, Ok(0.0));
        assert_eq!(penalty.category, Ok(0.0));
    }

    #[test]
    fn test_keywords_on_empty_text_is_invalid_denominator() {
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty("", &terms(&["Rust"]), &[], &config);
        assert!(matches!(
            penalty.keyword,
            Err(ScoringError::InvalidDenominator { .. })
        ));
        // the empty category bucket is unaffected
        assert_eq!(penalty.category, Ok(0.0));
    }

    #[test]
    fn test_single_mention_triggers_under_literal_rule() {
        // 1 in 100 words: frequency 0.01, normalized 0.2 ≥ 0.05
        let text = text_with(&["Rust"], 99);
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty(&text, &terms(&["Rust"]), &[], &config);
        let keyword = penalty.keyword.unwrap();
        assert!((keyword - 0.2).abs() < 1e-9, "Penalty {keyword}");
    }

    #[test]
    fn test_single_mention_passes_under_raw_rule() {
        let text = text_with(&["Rust"], 99);
        let config = StuffingConfig {
            rule: StuffingRule::RawFrequencyAtThreshold,
            ..StuffingConfig::default()
        };
        let penalty = stuffing_penalty(&text, &terms(&["Rust"]), &[], &config);
        assert_eq!(penalty.keyword, Ok(0.0));
    }

    #[test]
    fn test_normalized_value_caps_at_one() {
        // 5 in 20 words: frequency 0.25 → normalized min(5.0, 1.0)
        let text = text_with(&["Rust", "Rust", "Rust", "Rust", "Rust"], 15);
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty(&text, &terms(&["Rust"]), &[], &config);
        assert!((penalty.keyword.unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_absent_keyword_contributes_nothing() {
        let text = text_with(&[], 40);
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty(&text, &terms(&["Kafka"]), &[], &config);
        assert_eq!(penalty.keyword, Ok(0.0));
    }

    #[test]
    fn test_exact_token_matching_is_case_and_punctuation_sensitive() {
        let text = text_with(&["rust", "Rust,"], 18);
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty(&text, &terms(&["Rust"]), &[], &config);
        assert_eq!(penalty.keyword, Ok(0.0));
    }

    #[test]
    fn test_duplicate_terms_count_once() {
        let text = text_with(&["Rust"], 99);
        let config = StuffingConfig::default();
        let once = stuffing_penalty(&text, &terms(&["Rust"]), &[], &config);
        let twice = stuffing_penalty(&text, &terms(&["Rust", "Rust"]), &[], &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_buckets_are_independent() {
        let text = text_with(&["led", "Python", "Python"], 97);
        let config = StuffingConfig::default();
        let penalty = stuffing_penalty(&text, &terms(&["led"]), &terms(&["Python"]), &config);
        assert!((penalty.keyword.unwrap() - 0.2).abs() < 1e-9);
        assert!((penalty.category.unwrap() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_rule_from_str() {
        assert_eq!(
            "normalized".parse::<StuffingRule>().unwrap(),
            StuffingRule::NormalizedAtThreshold
        );
        assert_eq!(
            "RAW".parse::<StuffingRule>().unwrap(),
            StuffingRule::RawFrequencyAtThreshold
        );
        assert!("strict".parse::<StuffingRule>().is_err());
    }
}
