//! Structured resume extraction: personal information, education, work
//! history, certifications and skills as typed records.
//!
//! `LlmProfileExtractor` issues three concurrent model calls, one per section.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::{
    render, CAREER_SECTION_PROMPT, EXTRACTION_SYSTEM, IDENTITY_SECTION_PROMPT,
    SKILLS_SECTION_PROMPT,
};
use crate::llm_client::LlmClient;
use crate::models::resume::{CareerSection, IdentitySection, ResumeProfile, SkillsSection};

#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    async fn extract_profile(&self, resume_text: &str) -> Result<ResumeProfile, AppError>;
}

pub struct LlmProfileExtractor(pub LlmClient);

#[async_trait]
impl ProfileExtractor for LlmProfileExtractor {
    async fn extract_profile(&self, resume_text: &str) -> Result<ResumeProfile, AppError> {
        let identity_prompt = render(IDENTITY_SECTION_PROMPT, None, resume_text);
        let career_prompt = render(CAREER_SECTION_PROMPT, None, resume_text);
        let skills_prompt = render(SKILLS_SECTION_PROMPT, None, resume_text);

        let (identity, career, skills) = tokio::try_join!(
            self.0
                .call_json::<IdentitySection>(&identity_prompt, EXTRACTION_SYSTEM),
            self.0
                .call_json::<CareerSection>(&career_prompt, EXTRACTION_SYSTEM),
            self.0
                .call_json::<SkillsSection>(&skills_prompt, EXTRACTION_SYSTEM),
        )
        .map_err(|e| AppError::Llm(format!("Profile extraction failed: {e}")))?;

        info!(
            education = identity.education.len(),
            work_experience = career.work_experience.len(),
            certifications = career.certifications.len(),
            skills = skills.skills.len(),
            "Extracted resume profile"
        );

        Ok(ResumeProfile::from_sections(identity, career, skills))
    }
}
