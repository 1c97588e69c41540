use std::sync::Arc;

use crate::catalog::curated::ExampleLibrary;
use crate::catalog::RoleCatalog;
use crate::scoring::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable role profiles, validated at startup.
    pub catalog: Arc<RoleCatalog>,
    pub examples: Arc<ExampleLibrary>,
    /// Pluggable scorer. Default: KeywordResumeScorer over `catalog`.
    pub scorer: Arc<dyn ResumeScorer>,
}
