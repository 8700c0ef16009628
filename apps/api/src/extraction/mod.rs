// Extraction: the capability boundary between raw resume text and the scoring engine.
// All LLM calls go through llm_client. Handlers hold the extractors as trait
// objects so scoring can be exercised with synthetic facts.

pub mod facts;
pub mod profile;
pub mod prompts;
