use anyhow::{ensure, Context, Result};

use crate::scoring::config::{DEFAULT_READABILITY_CEILING, DEFAULT_STUFFING_THRESHOLD};
use crate::scoring::stuffing::StuffingRule;
use crate::scoring::ScoringConfig;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let lookup = |key: &str| std::env::var(key).ok();

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring: scoring_config_from(lookup)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Scoring overrides: ATS_STUFFING_THRESHOLD, ATS_STUFFING_RULE, ATS_READABILITY_CEILING.
fn scoring_config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<ScoringConfig> {
    let mut config = ScoringConfig::default();

    config.stuffing.threshold = match lookup("ATS_STUFFING_THRESHOLD") {
        Some(raw) => raw
            .parse::<f64>()
            .context("ATS_STUFFING_THRESHOLD must be a number")?,
        None => DEFAULT_STUFFING_THRESHOLD,
    };
    ensure!(
        config.stuffing.threshold.is_finite() && config.stuffing.threshold > 0.0,
        "ATS_STUFFING_THRESHOLD must be greater than zero"
    );

    if let Some(raw) = lookup("ATS_STUFFING_RULE") {
        config.stuffing.rule = raw
            .parse::<StuffingRule>()
            .map_err(anyhow::Error::msg)
            .context("ATS_STUFFING_RULE is invalid")?;
    }

    config.readability_ceiling = match lookup("ATS_READABILITY_CEILING") {
        Some(raw) => raw
            .parse::<f64>()
            .context("ATS_READABILITY_CEILING must be a number")?,
        None => DEFAULT_READABILITY_CEILING,
    };
    ensure!(
        (0.0..=DEFAULT_READABILITY_CEILING).contains(&config.readability_ceiling),
        "ATS_READABILITY_CEILING must be between 0 and {}",
        DEFAULT_READABILITY_CEILING
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::readability::readability_score;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = scoring_config_from(lookup_from(&[])).unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = scoring_config_from(lookup_from(&[
            ("ATS_STUFFING_THRESHOLD", "0.1"),
            ("ATS_STUFFING_RULE", "raw"),
            ("ATS_READABILITY_CEILING", "60"),
        ]))
        .unwrap();
        assert_eq!(config.stuffing.threshold, 0.1);
        assert_eq!(config.stuffing.rule, StuffingRule::RawFrequencyAtThreshold);
        assert_eq!(config.readability_ceiling, 60.0);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let result = scoring_config_from(lookup_from(&[("ATS_STUFFING_THRESHOLD", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_nan_ceiling_rejected() {
        let result = scoring_config_from(lookup_from(&[("ATS_READABILITY_CEILING", "NaN")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_ceiling_outside_range_rejected() {
        for raw in ["inf", "-1", "75"] {
            let result = scoring_config_from(lookup_from(&[("ATS_READABILITY_CEILING", raw)]));
            assert!(result.is_err(), "ceiling {raw} was accepted");
        }
    }

    #[test]
    fn test_accepted_ceiling_still_caps_readability() {
        let config =
            scoring_config_from(lookup_from(&[("ATS_READABILITY_CEILING", "30")])).unwrap();
        let score = readability_score(
            "The cat sat on the mat. The dog ran fast.",
            config.readability_ceiling,
        );
        assert_eq!(score, 30.0);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let result = scoring_config_from(lookup_from(&[("ATS_STUFFING_RULE", "strict")]));
        assert!(result.is_err());
    }
}
