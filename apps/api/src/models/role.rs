use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// Keyword profile for one target job role. Read-only once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Required skills. Identity is case-insensitive; authored casing is kept for output.
    pub skills: Vec<String>,
    /// Indicator words expected in the experience narrative.
    #[serde(default)]
    pub experience_keywords: Vec<String>,
    /// Indicator words expected in the education narrative.
    #[serde(default)]
    pub education_keywords: Vec<String>,
    /// Multiplier applied to the composite score.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl RoleProfile {
    pub fn new(
        skills: &[&str],
        experience_keywords: &[&str],
        education_keywords: &[&str],
        weight: f64,
    ) -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        Self {
            skills: owned(skills),
            experience_keywords: owned(experience_keywords),
            education_keywords: owned(education_keywords),
            weight,
        }
    }
}
