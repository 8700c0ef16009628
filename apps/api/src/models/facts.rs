use serde::Deserialize;

use crate::scoring::text_stats::sentence_count;
use crate::scoring::{PresenceFlag, ScoringError};

/// A resume to analyze against a target job title.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub text: String,
    pub career_name: String,
}

/// Contact presence as reported by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactFacts {
    pub email_score: Option<PresenceFlag>,
    pub phone_score: Option<PresenceFlag>,
    pub linkedin_score: Option<PresenceFlag>,
}

/// Keyword, job-title and work-experience facts measured against a career name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeywordFacts {
    pub keyword_count: Option<u32>,
    pub keywords: Option<Vec<String>>,
    pub job_title_count: Option<u32>,
    pub general_keyword_count: Option<u32>,
    pub category_keyword_count: Option<u32>,
    pub category_keywords: Option<Vec<String>>,
    #[serde(alias = "total_work_experience")]
    pub total_work_experience_count: Option<u32>,
    pub ats_keywords_to_add: Option<Vec<String>>,
    pub general_keywords_to_add: Option<Vec<String>>,
}

/// Facts as they arrive at the boundary, any of which may be missing.
/// Convert with `FactBundle::try_from` before scoring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractedFacts {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(flatten)]
    pub contact: ContactFacts,
    #[serde(flatten)]
    pub keywords: KeywordFacts,
}

/// Fully populated scoring input. Built once per analysis and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct FactBundle {
    pub resume_text: String,
    pub keywords: Vec<String>,
    pub category_keywords: Vec<String>,
    pub keyword_count: u32,
    pub category_keyword_count: u32,
    pub general_keyword_count: u32,
    pub job_title_count: u32,
    pub total_work_experience_count: u32,
    pub email: PresenceFlag,
    pub phone: PresenceFlag,
    pub linkedin: PresenceFlag,
    pub ats_keywords_to_add: Vec<String>,
    pub general_keywords_to_add: Vec<String>,
}

impl FactBundle {
    pub fn sentence_count(&self) -> u32 {
        sentence_count(&self.resume_text)
    }
}

impl TryFrom<ExtractedFacts> for FactBundle {
    type Error = ScoringError;

    fn try_from(facts: ExtractedFacts) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();

        fn take<T>(
            value: Option<T>,
            name: &'static str,
            missing: &mut Vec<&'static str>,
        ) -> Option<T> {
            if value.is_none() {
                missing.push(name);
            }
            value
        }

        let ExtractedFacts {
            resume_text,
            contact,
            keywords: kw,
        } = facts;

        let resume_text = take(
            resume_text.filter(|t| !t.trim().is_empty()),
            "resume_text",
            &mut missing,
        );
        let email = take(contact.email_score, "email_score", &mut missing);
        let phone = take(contact.phone_score, "phone_score", &mut missing);
        let linkedin = take(contact.linkedin_score, "linkedin_score", &mut missing);
        let keyword_count = take(kw.keyword_count, "keyword_count", &mut missing);
        let keywords = take(kw.keywords, "keywords", &mut missing);
        let job_title_count = take(kw.job_title_count, "job_title_count", &mut missing);
        let general_keyword_count =
            take(kw.general_keyword_count, "general_keyword_count", &mut missing);
        let category_keyword_count =
            take(kw.category_keyword_count, "category_keyword_count", &mut missing);
        let category_keywords = take(kw.category_keywords, "category_keywords", &mut missing);
        let total_work_experience_count = take(
            kw.total_work_experience_count,
            "total_work_experience_count",
            &mut missing,
        );

        match (
            resume_text,
            email,
            phone,
            linkedin,
            keyword_count,
            keywords,
            job_title_count,
            general_keyword_count,
            category_keyword_count,
            category_keywords,
            total_work_experience_count,
        ) {
            (
                Some(resume_text),
                Some(email),
                Some(phone),
                Some(linkedin),
                Some(keyword_count),
                Some(keywords),
                Some(job_title_count),
                Some(general_keyword_count),
                Some(category_keyword_count),
                Some(category_keywords),
                Some(total_work_experience_count),
            ) => Ok(FactBundle {
                resume_text,
                keywords,
                category_keywords,
                keyword_count,
                category_keyword_count,
                general_keyword_count,
                job_title_count,
                total_work_experience_count,
                email,
                phone,
                linkedin,
                ats_keywords_to_add: kw.ats_keywords_to_add.unwrap_or_default(),
                general_keywords_to_add: kw.general_keywords_to_add.unwrap_or_default(),
            }),
            _ => Err(ScoringError::IncompleteFactBundle { missing }),
        }
    }
}
