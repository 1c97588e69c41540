use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::scoring::similarity::SimilarityMetric;
use crate::scoring::{ScoringConfig, DEFAULT_FUZZY_THRESHOLD};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON role catalog. `None` ⇒ built-in roles.
    pub role_catalog_path: Option<PathBuf>,
    /// JSON curated examples keyed by role. `None` ⇒ no examples.
    pub examples_path: Option<PathBuf>,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let fuzzy_threshold = match lookup("FUZZY_THRESHOLD") {
            Some(raw) => raw
                .parse::<f64>()
                .context("FUZZY_THRESHOLD must be a number")?,
            None => DEFAULT_FUZZY_THRESHOLD,
        };
        if !(0.0..=1.0).contains(&fuzzy_threshold) {
            bail!("FUZZY_THRESHOLD must be within [0, 1], got {fuzzy_threshold}");
        }

        let metric = match lookup("SIMILARITY_METRIC") {
            Some(raw) => raw
                .parse::<SimilarityMetric>()
                .map_err(anyhow::Error::msg)
                .context("SIMILARITY_METRIC is invalid")?,
            None => SimilarityMetric::default(),
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            role_catalog_path: optional_path(&lookup, "ROLE_CATALOG_PATH"),
            examples_path: optional_path(&lookup, "EXAMPLES_PATH"),
            scoring: ScoringConfig {
                fuzzy_threshold,
                metric,
            },
        })
    }
}

fn optional_path(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<PathBuf> {
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
