//! Composite Aggregator: folds eight sub-scores and two penalties into the
//! ATS keyword score.
//!
//! ats = (keyword + category + general + email + phone + linkedin
//!        + job_title + readability) / 800 * 100
//!       - (keyword_stuffing + category_stuffing)
//!
//! The result is NOT clamped: penalties can push it below zero.

use crate::scoring::contact::PresenceFlag;

/// Sum of eight terms when every one is 100.
const MAX_TERM_SUM: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtsScoreInputs {
    pub keyword_score: f64,
    pub category_keyword_score: f64,
    pub general_keyword_score: f64,
    pub email: PresenceFlag,
    pub phone: PresenceFlag,
    pub linkedin: PresenceFlag,
    pub job_title_score: f64,
    pub readability_score: f64,
    pub keyword_stuffing_penalty: f64,
    pub category_stuffing_penalty: f64,
}

pub fn ats_keyword_score(inputs: &AtsScoreInputs) -> f64 {
    let terms = [
        inputs.keyword_score,
        inputs.category_keyword_score,
        inputs.general_keyword_score,
        inputs.email.as_score(),
        inputs.phone.as_score(),
        inputs.linkedin.as_score(),
        inputs.job_title_score,
        inputs.readability_score,
    ];
    let sum: f64 = terms.iter().sum();

    sum / MAX_TERM_SUM * 100.0
        - (inputs.keyword_stuffing_penalty + inputs.category_stuffing_penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::scoring::contact::PresenceFlag::{Absent, Present};

    fn uniform(score: f64, flag: PresenceFlag) -> AtsScoreInputs {
        AtsScoreInputs {
            keyword_score: score,
            category_keyword_score: score,
            general_keyword_score: score,
            email: flag,
            phone: flag,
            linkedin: flag,
            job_title_score: score,
            readability_score: score,
            keyword_stuffing_penalty: 0.0,
            category_stuffing_penalty: 0.0,
        }
    }

    #[test]
    fn test_all_perfect_is_exactly_100() {
        assert_eq!(ats_keyword_score(&uniform(100.0, Present)), 100.0);
    }

    #[test]
    fn test_all_zero_is_exactly_0() {
        assert_eq!(ats_keyword_score(&uniform(0.0, Absent)), 0.0);
    }

    #[test]
    fn test_mixed_inputs() {
        let inputs = AtsScoreInputs {
            keyword_score: 30.0,
            category_keyword_score: 20.0,
            general_keyword_score: 60.0,
            email: Present,
            phone: Present,
            linkedin: Absent,
            job_title_score: 50.0,
            readability_score: 40.0,
            keyword_stuffing_penalty: 1.5,
            category_stuffing_penalty: 0.5,
        };
        // (30 + 20 + 60 + 100 + 100 + 0 + 50 + 40) / 800 * 100 - 2 = 50 - 2
        let score = ats_keyword_score(&inputs);
        assert!((score - 48.0).abs() < 1e-9, "Score was {score}");
    }

    #[test]
    fn test_penalties_can_drive_score_negative() {
        let inputs = AtsScoreInputs {
            keyword_stuffing_penalty: 4.0,
            category_stuffing_penalty: 3.0,
            ..uniform(0.0, Absent)
        };
        assert_eq!(ats_keyword_score(&inputs), -7.0);
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = uniform(37.5, Present);
        assert_eq!(ats_keyword_score(&inputs), ats_keyword_score(&inputs));
    }
}
