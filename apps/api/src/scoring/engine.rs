//! Scoring Engine: turns one `FactBundle` into one `ScoreReport`.
//!
//! Each sub-score is computed independently. A sub-score that cannot be
//! computed (zero denominator) is reported as a `ScoreFailure` and left null;
//! the rest of the report is still produced.

use tracing::{debug, warn};

use crate::models::facts::FactBundle;
use crate::models::report::{ScoreFailure, ScoreReport};
use crate::scoring::aggregate::{ats_keyword_score, AtsScoreInputs};
use crate::scoring::config::ScoringConfig;
use crate::scoring::contact::contact_score;
use crate::scoring::percentage::normalize_percentage;
use crate::scoring::readability::{readability_score, ReadabilityLevel};
use crate::scoring::stuffing::stuffing_penalty;
use crate::scoring::ScoringError;

#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, bundle: &FactBundle) -> ScoreReport {
        let mut errors = Vec::new();
        let sentences = bundle.sentence_count();

        let keyword_score = recorded(
            &mut errors,
            "keyword_score",
            normalize_percentage(bundle.keyword_count, sentences, "sentence_count"),
        );
        let category_keyword_score = recorded(
            &mut errors,
            "category_keyword_score",
            normalize_percentage(bundle.category_keyword_count, sentences, "sentence_count"),
        );
        let general_keyword_score = recorded(
            &mut errors,
            "general_keyword_score",
            normalize_percentage(bundle.general_keyword_count, sentences, "sentence_count"),
        );
        let job_title_score = recorded(
            &mut errors,
            "job_title_score",
            normalize_percentage(
                bundle.job_title_count,
                bundle.total_work_experience_count,
                "total_work_experience_count",
            ),
        );

        let stuffing = stuffing_penalty(
            &bundle.resume_text,
            &bundle.keywords,
            &bundle.category_keywords,
            &self.config.stuffing,
        );
        let keyword_stuffing_score =
            recorded(&mut errors, "keyword_stuffing_score", stuffing.keyword);
        let category_keyword_stuffing_score = recorded(
            &mut errors,
            "category_keyword_stuffing_score",
            stuffing.category,
        );

        let readability = readability_score(&bundle.resume_text, self.config.readability_ceiling);
        let readability_level = ReadabilityLevel::from_score(readability);

        let contact_info_score = contact_score(
            bundle.email,
            bundle.phone,
            bundle.linkedin,
            &self.config.contact_weights,
        );

        let ats_inputs = match (
            keyword_score,
            category_keyword_score,
            general_keyword_score,
            job_title_score,
            keyword_stuffing_score,
            category_keyword_stuffing_score,
        ) {
            (
                Some(keyword_score),
                Some(category_keyword_score),
                Some(general_keyword_score),
                Some(job_title_score),
                Some(keyword_stuffing_penalty),
                Some(category_stuffing_penalty),
            ) => Some(AtsScoreInputs {
                keyword_score,
                category_keyword_score,
                general_keyword_score,
                email: bundle.email,
                phone: bundle.phone,
                linkedin: bundle.linkedin,
                job_title_score,
                readability_score: readability,
                keyword_stuffing_penalty,
                category_stuffing_penalty,
            }),
            _ => None,
        };
        let ats_keyword_score = ats_inputs.as_ref().map(ats_keyword_score);

        debug!(
            sentences,
            readability,
            contact_info_score,
            ats_keyword_score = ?ats_keyword_score,
            failed = errors.len(),
            "Scored fact bundle"
        );

        ScoreReport {
            email_score: bundle.email,
            phone_score: bundle.phone,
            linkedin_score: bundle.linkedin,
            contact_info_score,
            keyword_score,
            keyword_stuffing_score,
            category_keyword_score,
            category_keyword_stuffing_score,
            general_keyword_score,
            job_title_score,
            readability_score: readability,
            readability_level,
            ats_keyword_score,
            ats_keywords_to_add: bundle.ats_keywords_to_add.clone(),
            general_keywords_to_add: bundle.general_keywords_to_add.clone(),
            errors,
        }
    }
}

/// Unwraps a sub-score, recording the failure against `field` if there is one.
fn recorded(
    errors: &mut Vec<ScoreFailure>,
    field: &'static str,
    result: Result<f64, ScoringError>,
) -> Option<f64> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Sub-score {field} could not be computed: {e}");
            errors.push(ScoreFailure {
                field,
                message: e.to_string(),
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::PresenceFlag;

    /// Ten sentences of four words each, plus whatever `extra` is appended.
    fn ten_sentences(extra: &str) -> String {
        let mut text = (1..=10)
            .map(|i| format!("Shipped feature number {i}."))
            .collect::<Vec<_>>()
            .join(" ");
        text.push_str(extra);
        text
    }

    fn bundle(resume_text: String) -> FactBundle {
        FactBundle {
            resume_text,
            keywords: vec![],
            category_keywords: vec![],
            keyword_count: 3,
            category_keyword_count: 0,
            general_keyword_count: 20,
            job_title_count: 2,
            total_work_experience_count: 4,
            email: PresenceFlag::Present,
            phone: PresenceFlag::Present,
            linkedin: PresenceFlag::Absent,
            ats_keywords_to_add: vec!["Architected".to_string()],
            general_keywords_to_add: vec![],
        }
    }

    #[test]
    fn test_keyword_and_job_title_scenarios() {
        let engine = ScoringEngine::default();
        let report = engine.score(&bundle(ten_sentences("")));

        assert_eq!(report.keyword_score, Some(30.0));
        assert_eq!(report.job_title_score, Some(50.0));
        assert_eq!(report.general_keyword_score, Some(100.0));
        assert_eq!(report.category_keyword_score, Some(0.0));
        assert_eq!(report.contact_info_score, 66);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_ats_score_matches_aggregate_of_sub_scores() {
        let engine = ScoringEngine::default();
        let report = engine.score(&bundle(ten_sentences("")));

        let expected = (30.0 + 0.0 + 100.0 + 100.0 + 100.0 + 0.0 + 50.0
            + report.readability_score)
            / 800.0
            * 100.0;
        let ats = report.ats_keyword_score.unwrap();
        assert!((ats - expected).abs() < 1e-9, "{ats} vs {expected}");
        assert!(report.readability_score <= 50.0);
    }

    #[test]
    fn test_zero_work_experience_fails_only_job_title() {
        let engine = ScoringEngine::default();
        let mut facts = bundle(ten_sentences(""));
        facts.total_work_experience_count = 0;

        let report = engine.score(&facts);
        assert_eq!(report.job_title_score, None);
        assert_eq!(report.keyword_score, Some(30.0));
        assert_eq!(report.ats_keyword_score, None);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field, "job_title_score");
    }

    #[test]
    fn test_text_without_sentences_fails_sentence_based_scores() {
        let engine = ScoringEngine::default();
        let report = engine.score(&bundle("...".to_string()));

        assert_eq!(report.keyword_score, None);
        assert_eq!(report.category_keyword_score, None);
        assert_eq!(report.general_keyword_score, None);
        assert_eq!(report.job_title_score, Some(50.0));
        assert_eq!(report.ats_keyword_score, None);
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_stuffing_penalties_flow_into_ats_score() {
        let engine = ScoringEngine::default();
        let mut facts = bundle(ten_sentences(" Rust Rust Rust Rust Rust Rust."));
        facts.keywords = vec!["Rust".to_string()];

        let clean = engine.score(&bundle(facts.resume_text.clone()));
        let stuffed = engine.score(&facts);

        let penalty = stuffed.keyword_stuffing_score.unwrap();
        assert!(penalty > 0.0);
        assert_eq!(stuffed.category_keyword_stuffing_score, Some(0.0));
        let delta = clean.ats_keyword_score.unwrap() - stuffed.ats_keyword_score.unwrap();
        assert!((delta - penalty).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let engine = ScoringEngine::default();
        let facts = bundle(ten_sentences(" Python Python."));
        assert_eq!(engine.score(&facts), engine.score(&facts));
    }

    #[test]
    fn test_report_serializes_with_contract_field_names() {
        let engine = ScoringEngine::default();
        let value = serde_json::to_value(engine.score(&bundle(ten_sentences("")))).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "email_score",
            "phone_score",
            "linkedin_score",
            "contact_info_score",
            "keyword_score",
            "keyword_stuffing_score",
            "category_keyword_score",
            "category_keyword_stuffing_score",
            "general_keyword_score",
            "job_title_score",
            "readability_score",
            "readability_level",
            "ats_keyword_score",
            "ats_keywords_to_add",
            "general_keywords_to_add",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(object["email_score"], "Yes");
        assert_eq!(object["linkedin_score"], "No");
        assert!(!object.contains_key("errors"));
    }
}
