//! Scoring engine: measures a structured résumé against a role keyword profile.
//!
//! Four independent passes over the same (résumé, profile) pair feed the
//! aggregator: content flattening, fuzzy skill presence, per-section
//! whole-word localisation and keyword evidence. Everything here is pure and
//! deterministic; calls may run concurrently without coordination.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>` so the HTTP layer never
//! depends on a concrete backend.

pub mod aggregate;
pub mod categorize;
pub mod evidence;
pub mod fuzzy;
pub mod handlers;
pub mod sections;
pub mod similarity;
pub mod tokenize;

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::RoleCatalog;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::scoring::aggregate::{score_resume, ScoreOutcome};
use crate::scoring::similarity::SimilarityMetric;

pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Tunables for the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Minimum similarity for a token to count as a skill hit.
    pub fuzzy_threshold: f64,
    pub metric: SimilarityMetric,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            metric: SimilarityMetric::Sequence,
        }
    }
}

/// Implement this to swap scoring backends without touching handlers.
#[async_trait]
pub trait ResumeScorer: Send + Sync {
    async fn score(&self, resume: &ResumeData, job_role: &str) -> Result<ScoreOutcome, AppError>;
}

/// Keyword/fuzzy scorer over a fixed role catalog.
pub struct KeywordResumeScorer {
    catalog: Arc<RoleCatalog>,
    config: ScoringConfig,
}

impl KeywordResumeScorer {
    pub fn new(catalog: Arc<RoleCatalog>, config: ScoringConfig) -> Self {
        Self { catalog, config }
    }
}

#[async_trait]
impl ResumeScorer for KeywordResumeScorer {
    async fn score(&self, resume: &ResumeData, job_role: &str) -> Result<ScoreOutcome, AppError> {
        Ok(score_resume(resume, job_role, &self.catalog, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_keyword_scorer_delegates_to_engine() {
        let scorer = KeywordResumeScorer::new(Arc::new(RoleCatalog::builtin()), ScoringConfig::default());
        let resume = ResumeData::new().with_section("skills", vec!["Python", "Docker"]);

        let outcome = scorer.score(&resume, "Software Engineer").await.unwrap();
        assert_eq!(outcome.score(), 23);

        let unknown = scorer.score(&resume, "Astronaut").await.unwrap();
        assert!(matches!(unknown, ScoreOutcome::UnknownRole(_)));
    }

    #[tokio::test]
    async fn test_stricter_threshold_rejects_misspellings() {
        let resume = ResumeData::new().with_section("skills", vec!["pythn"]);
        let catalog = Arc::new(RoleCatalog::builtin());

        let lenient = KeywordResumeScorer::new(catalog.clone(), ScoringConfig::default());
        let strict = KeywordResumeScorer::new(
            catalog,
            ScoringConfig {
                fuzzy_threshold: 1.0,
                ..ScoringConfig::default()
            },
        );

        assert_eq!(lenient.score(&resume, "Software Engineer").await.unwrap().score(), 12);
        assert_eq!(strict.score(&resume, "Software Engineer").await.unwrap().score(), 0);
    }
}
