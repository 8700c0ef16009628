// ATS Scoring Engine
// Pure, synchronous transformations from extracted resume facts to a score report.
// Nothing in this module performs I/O or holds state between calls.

pub mod aggregate;
pub mod config;
pub mod contact;
pub mod engine;
pub mod percentage;
pub mod readability;
pub mod stuffing;
pub mod text_stats;

use thiserror::Error;

pub use config::ScoringConfig;
pub use contact::PresenceFlag;
pub use engine::ScoringEngine;
pub use readability::ReadabilityLevel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A normalization denominator (sentence count, work-experience count,
    /// lexical word count) was zero.
    #[error("{quantity} is zero; cannot normalize against it")]
    InvalidDenominator { quantity: &'static str },

    #[error("Fact bundle is missing required fields: {}", missing.join(", "))]
    IncompleteFactBundle { missing: Vec<&'static str> },
}
