//! Score aggregation: combines the four evidence passes into one result record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::RoleCatalog;
use crate::models::resume::ResumeData;
use crate::models::role::RoleProfile;
use crate::scoring::evidence::{find_indicators, skill_frequency};
use crate::scoring::fuzzy::partition_skills;
use crate::scoring::sections::{compile_all, localize_skills};
use crate::scoring::tokenize::flatten_content;
use crate::scoring::ScoringConfig;

/// Share of the composite score carried by each factor.
const SKILL_POINTS: f64 = 70.0;
const EXPERIENCE_POINTS: f64 = 15.0;
const EDUCATION_POINTS: f64 = 15.0;
const MAX_SCORE: u32 = 100;

pub const UNKNOWN_ROLE_REASON: &str = "Unknown role";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub weight: f64,
}

/// Full evidence-backed score of one résumé against one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub section_matches: BTreeMap<String, Vec<String>>,
    pub experience_keywords_found: Vec<String>,
    pub education_keywords_found: Vec<String>,
    pub skill_keyword_frequency: BTreeMap<String, usize>,
    pub total_skills_required: usize,
    pub match_percentage: f64,
    pub scoring_breakdown: ScoringBreakdown,
}

/// Degraded result for a role name the catalog does not know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnknownRoleResult {
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub reason: String,
}

impl Default for UnknownRoleResult {
    fn default() -> Self {
        Self {
            score: 0,
            matched_skills: vec![],
            missing_skills: vec![],
            reason: UNKNOWN_ROLE_REASON.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreOutcome {
    Scored(ScoreResult),
    UnknownRole(UnknownRoleResult),
}

impl ScoreOutcome {
    pub fn score(&self) -> u32 {
        match self {
            ScoreOutcome::Scored(result) => result.score,
            ScoreOutcome::UnknownRole(result) => result.score,
        }
    }
}

/// Looks `job_role` up by exact name and scores against it. Unknown roles
/// short-circuit to [`ScoreOutcome::UnknownRole`].
pub fn score_resume(
    resume: &ResumeData,
    job_role: &str,
    catalog: &RoleCatalog,
    config: &ScoringConfig,
) -> ScoreOutcome {
    match catalog.get(job_role) {
        Some(profile) => {
            let result = score_against_profile(resume, profile, config);
            debug!(
                "Scored resume for '{job_role}': {}/{} skills matched, score {}",
                result.matched_skills.len(),
                result.total_skills_required,
                result.score
            );
            ScoreOutcome::Scored(result)
        }
        None => {
            warn!("Scoring requested for unknown role '{job_role}'");
            ScoreOutcome::UnknownRole(UnknownRoleResult::default())
        }
    }
}

/// Scores against a validated profile (non-empty `skills`).
///
/// skill = matched/S × 70, experience = found/len × 15, education = found/len × 15
/// (a factor with no indicator words contributes 0), then
/// score = min(round_half_even((skill + experience + education) × weight), 100).
pub fn score_against_profile(
    resume: &ResumeData,
    profile: &RoleProfile,
    config: &ScoringConfig,
) -> ScoreResult {
    let tokens = flatten_content(resume);
    let partition = partition_skills(&profile.skills, &tokens, config);

    let skill_matchers = compile_all(&profile.skills);
    let section_matches = localize_skills(resume, &skill_matchers);

    let indicators = find_indicators(
        resume,
        &compile_all(&profile.experience_keywords),
        &compile_all(&profile.education_keywords),
    );
    let skill_keyword_frequency = skill_frequency(&profile.skills, &tokens);

    let total = profile.skills.len();
    let skill_ratio = partition.matched.len() as f64 / total as f64;
    let skill_score = skill_ratio * SKILL_POINTS;
    let experience_score = factor_score(
        indicators.experience.len(),
        profile.experience_keywords.len(),
        EXPERIENCE_POINTS,
    );
    let education_score = factor_score(
        indicators.education.len(),
        profile.education_keywords.len(),
        EDUCATION_POINTS,
    );

    let raw = (skill_score + experience_score + education_score) * profile.weight;
    let score = (raw.round_ties_even().max(0.0) as u32).min(MAX_SCORE);

    ScoreResult {
        score,
        matched_skills: partition.matched,
        missing_skills: partition.missing,
        section_matches,
        experience_keywords_found: indicators.experience,
        education_keywords_found: indicators.education,
        skill_keyword_frequency,
        total_skills_required: total,
        match_percentage: round_to(skill_ratio * 100.0, 2),
        scoring_breakdown: ScoringBreakdown {
            skill_score: round_to(skill_score, 2),
            experience_score: round_to(experience_score, 2),
            education_score: round_to(education_score, 2),
            weight: profile.weight,
        },
    }
}

fn factor_score(found: usize, expected: usize, points: f64) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    found as f64 / expected as f64 * points
}

/// Half-to-even rounding at `places` decimals.
fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    (value * scale).round_ties_even() / scale
}
