//! Fuzzy skill presence over flattened content.
//!
//! Each skill is compared as one string against single tokens, so a
//! multi-word skill such as "machine learning" only matches when a token is
//! close to the whole phrase (e.g. "machinelearning"). Phrase-level matching
//! against n-grams is deliberately not attempted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Required skills split by fuzzy presence. Together they cover the profile's
/// skills exactly once each, in profile order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillPartition {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn partition_skills(
    skills: &[String],
    tokens: &[String],
    config: &ScoringConfig,
) -> SkillPartition {
    let distinct: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
    let mut partition = SkillPartition::default();
    for skill in skills {
        if is_present(skill, &distinct, config) {
            partition.matched.push(skill.clone());
        } else {
            partition.missing.push(skill.clone());
        }
    }
    partition
}

fn is_present(skill: &str, tokens: &BTreeSet<&str>, config: &ScoringConfig) -> bool {
    let term = skill.to_lowercase();
    tokens
        .iter()
        .any(|token| config.metric.is_close(token, &term, config.fuzzy_threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tokenize::tokenize;

    fn skills(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_and_case_insensitive_presence() {
        let tokens = tokenize("Python and DOCKER");
        let p = partition_skills(&skills(&["python", "Docker", "java"]), &tokens, &ScoringConfig::default());
        assert_eq!(p.matched, vec!["python", "Docker"]);
        assert_eq!(p.missing, vec!["java"]);
    }

    #[test]
    fn test_tolerates_minor_misspelling() {
        let tokens = tokenize("kubernets pythn");
        let p = partition_skills(&skills(&["kubernetes", "python"]), &tokens, &ScoringConfig::default());
        assert_eq!(p.matched, vec!["kubernetes", "python"]);
    }

    #[test]
    fn test_substring_containment_is_not_enough() {
        let tokens = tokenize("javascript mysql");
        let p = partition_skills(&skills(&["java", "sql"]), &tokens, &ScoringConfig::default());
        assert!(p.matched.is_empty());
        assert_eq!(p.missing, vec!["java", "sql"]);
    }

    #[test]
    fn test_multi_word_skill_needs_joined_form() {
        let config = ScoringConfig::default();
        let spaced = partition_skills(&skills(&["machine learning"]), &tokenize("machine learning"), &config);
        assert_eq!(spaced.missing, vec!["machine learning"]);

        let joined = partition_skills(&skills(&["machine learning"]), &tokenize("machinelearning"), &config);
        assert_eq!(joined.matched, vec!["machine learning"]);
    }

    #[test]
    fn test_partition_covers_every_skill_once() {
        let required = skills(&["python", "java", "react", "api", "docker", "kubernetes"]);
        let tokens = tokenize("react apis docker");
        let p = partition_skills(&required, &tokens, &ScoringConfig::default());
        assert_eq!(p.matched.len() + p.missing.len(), required.len());
        for skill in &required {
            assert!(p.matched.contains(skill) ^ p.missing.contains(skill), "{skill}");
        }
    }

    #[test]
    fn test_empty_content_matches_nothing() {
        let p = partition_skills(&skills(&["python"]), &[], &ScoringConfig::default());
        assert!(p.matched.is_empty());
        assert_eq!(p.missing, vec!["python"]);
    }
}
