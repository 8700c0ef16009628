use crate::scoring::stuffing::StuffingRule;

/// Density at which a keyword is considered stuffed.
pub const DEFAULT_STUFFING_THRESHOLD: f64 = 0.05;

/// Readability above this adds nothing for ATS purposes.
pub const DEFAULT_READABILITY_CEILING: f64 = 50.0;

/// Points contributed by each contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactWeights {
    pub email: u32,
    pub phone: u32,
    pub linkedin: u32,
}

impl Default for ContactWeights {
    fn default() -> Self {
        Self {
            email: 33,
            phone: 33,
            linkedin: 34,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StuffingConfig {
    pub threshold: f64,
    pub rule: StuffingRule,
}

impl Default for StuffingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STUFFING_THRESHOLD,
            rule: StuffingRule::default(),
        }
    }
}

/// Everything the scoring engine can be tuned with. Built once at startup
/// and handed to `ScoringEngine::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub contact_weights: ContactWeights,
    pub stuffing: StuffingConfig,
    pub readability_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            contact_weights: ContactWeights::default(),
            stuffing: StuffingConfig::default(),
            readability_ceiling: DEFAULT_READABILITY_CEILING,
        }
    }
}
