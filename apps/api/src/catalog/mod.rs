//! Role catalog: the immutable table of job-role keyword profiles.
//!
//! Built once at startup (built-in table or a JSON file) and handed to the
//! scorer by reference. Every profile is validated here so that the scoring
//! path never divides by an empty skill list.

pub mod curated;
pub mod handlers;

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::models::role::RoleProfile;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no roles")]
    EmptyCatalog,

    #[error("role name must not be blank")]
    BlankRoleName,

    #[error("role '{0}' is defined more than once")]
    DuplicateRole(String),

    #[error("role '{role}' has no required skills")]
    EmptySkills { role: String },

    #[error("role '{role}' has a blank entry in {field}")]
    BlankKeyword { role: String, field: &'static str },

    #[error("role '{role}' has invalid weight {weight} (must be a positive finite number)")]
    InvalidWeight { role: String, weight: f64 },
}

/// One row of a catalog file.
#[derive(Debug, Deserialize)]
struct RoleEntry {
    name: String,
    #[serde(flatten)]
    profile: RoleProfile,
}

/// Immutable role-name → profile table. Lookup is exact (no case folding or trimming).
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<(String, RoleProfile)>,
}

impl RoleCatalog {
    /// Validates every profile and builds the catalog. Insertion order is kept.
    pub fn new(roles: Vec<(String, RoleProfile)>) -> Result<Self, CatalogError> {
        if roles.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for (i, (name, profile)) in roles.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CatalogError::BlankRoleName);
            }
            if roles[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(CatalogError::DuplicateRole(name.clone()));
            }
            validate_profile(name, profile)?;
        }
        Ok(Self { roles })
    }

    /// The three roles the service ships with.
    pub fn builtin() -> Self {
        let roles = vec![
            (
                "Software Engineer".to_string(),
                RoleProfile::new(
                    &["python", "java", "react", "api", "docker", "kubernetes"],
                    &["developed", "engineered", "built", "deployed", "maintained"],
                    &["bachelor", "master", "computer science", "software engineering"],
                    1.0,
                ),
            ),
            (
                "Data Scientist".to_string(),
                RoleProfile::new(
                    &["python", "sql", "machine learning", "statistics", "data visualization"],
                    &["analyzed", "modeled", "predicted", "visualized", "cleaned"],
                    &["bachelor", "master", "statistics", "data science", "mathematics"],
                    1.2,
                ),
            ),
            (
                "Product Manager".to_string(),
                RoleProfile::new(
                    &["product", "strategy", "stakeholder", "roadmap", "user research"],
                    &["launched", "managed", "coordinated", "led", "planned"],
                    &["bachelor", "mba", "business", "management"],
                    0.9,
                ),
            ),
        ];
        Self { roles }
    }

    /// Parses a JSON array of `{ name, skills, experience_keywords, education_keywords, weight }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<RoleEntry> = serde_json::from_str(json)?;
        Self::new(entries.into_iter().map(|e| (e.name, e.profile)).collect())
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} role profiles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, role: &str) -> Option<&RoleProfile> {
        self.roles
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, profile)| profile)
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

fn validate_profile(role: &str, profile: &RoleProfile) -> Result<(), CatalogError> {
    if profile.skills.is_empty() {
        return Err(CatalogError::EmptySkills {
            role: role.to_string(),
        });
    }
    let fields: [(&'static str, &[String]); 3] = [
        ("skills", &profile.skills),
        ("experience_keywords", &profile.experience_keywords),
        ("education_keywords", &profile.education_keywords),
    ];
    for (field, words) in fields {
        if words.iter().any(|w| w.trim().is_empty()) {
            return Err(CatalogError::BlankKeyword {
                role: role.to_string(),
                field,
            });
        }
    }
    if !(profile.weight.is_finite() && profile.weight > 0.0) {
        return Err(CatalogError::InvalidWeight {
            role: role.to_string(),
            weight: profile.weight,
        });
    }
    Ok(())
}
