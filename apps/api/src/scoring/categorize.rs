use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeData, SKILLS};

const TECHNICAL_INDICATORS: &[&str] = &[
    "python",
    "java",
    "sql",
    "javascript",
    "react",
    "aws",
    "docker",
    "kubernetes",
    "machine learning",
    "data science",
    "git",
    "linux",
];

const SOFT_INDICATORS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "analytical",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub total_skills: usize,
}

/// Splits the list-form `skills` section into technical and soft skills by
/// substring indicators. Skills matching neither count as technical.
pub fn categorize_skills(resume: &ResumeData) -> SkillCategories {
    let skills = resume.list_items(SKILLS);
    let mut categories = SkillCategories {
        total_skills: skills.len(),
        ..SkillCategories::default()
    };

    for skill in skills {
        let lower = skill.to_lowercase();
        let contains_any = |indicators: &[&str]| indicators.iter().any(|i| lower.contains(i));
        if !contains_any(TECHNICAL_INDICATORS) && contains_any(SOFT_INDICATORS) {
            categories.soft_skills.push(skill.clone());
        } else {
            categories.technical_skills.push(skill.clone());
        }
    }
    categories
}
