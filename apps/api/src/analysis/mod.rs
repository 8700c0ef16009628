// Resume Analysis API: fact extraction, scoring and structured profile extraction.
// All LLM calls go through the extractors in `extraction`.

pub mod handlers;
