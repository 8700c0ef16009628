//! Fact extraction: pluggable, trait-based producer of `FactBundle`s.
//!
//! Default: `LlmFactExtractor`, two concurrent model calls (contact presence,
//! keyword analysis against the career name) joined before the bundle is built.
//!
//! `AppState` holds an `Arc<dyn FactExtractor>`.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::prompts::{
    render, CONTACT_FACTS_PROMPT, EXTRACTION_SYSTEM, KEYWORD_FACTS_PROMPT,
};
use crate::llm_client::LlmClient;
use crate::models::facts::{ContactFacts, ExtractedFacts, FactBundle, KeywordFacts, ResumeDocument};

#[async_trait]
pub trait FactExtractor: Send + Sync {
    async fn extract(&self, document: &ResumeDocument) -> Result<FactBundle, AppError>;
}

pub struct LlmFactExtractor(pub LlmClient);

#[async_trait]
impl FactExtractor for LlmFactExtractor {
    async fn extract(&self, document: &ResumeDocument) -> Result<FactBundle, AppError> {
        let contact_prompt = render(CONTACT_FACTS_PROMPT, None, &document.text);
        let keyword_prompt = render(
            KEYWORD_FACTS_PROMPT,
            Some(&document.career_name),
            &document.text,
        );

        let (contact, keywords) = tokio::try_join!(
            self.0
                .call_json::<ContactFacts>(&contact_prompt, EXTRACTION_SYSTEM),
            self.0
                .call_json::<KeywordFacts>(&keyword_prompt, EXTRACTION_SYSTEM),
        )
        .map_err(|e| AppError::Llm(format!("Fact extraction failed: {e}")))?;

        info!(
            career_name = %document.career_name,
            keyword_count = ?keywords.keyword_count,
            work_experience = ?keywords.total_work_experience_count,
            "Extracted resume facts"
        );

        let facts = ExtractedFacts {
            resume_text: Some(document.text.clone()),
            contact,
            keywords,
        };
        Ok(FactBundle::try_from(facts)?)
    }
}
