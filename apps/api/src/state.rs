use std::sync::Arc;

use crate::extraction::facts::FactExtractor;
use crate::extraction::profile::ProfileExtractor;
use crate::scoring::ScoringEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
    /// Pluggable fact extractor. Default: LlmFactExtractor.
    pub fact_extractor: Arc<dyn FactExtractor>,
    pub profile_extractor: Arc<dyn ProfileExtractor>,
}
