//! Keyword evidence: exact skill frequencies and indicator-word detection.

use std::collections::{BTreeMap, HashMap};

use crate::models::resume::{ResumeData, EDUCATION, EXPERIENCE};
use crate::scoring::sections::{find_whole_words, WholeWord};

/// Exact-token occurrence count of each skill (by its lowercase form) in the
/// flattened content. Keyed by the skill as authored.
pub fn skill_frequency(skills: &[String], tokens: &[String]) -> BTreeMap<String, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    skills
        .iter()
        .map(|skill| {
            let n = counts.get(skill.to_lowercase().as_str()).copied().unwrap_or(0);
            (skill.clone(), n)
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorHits {
    pub experience: Vec<String>,
    pub education: Vec<String>,
}

/// Indicator words found as whole words in the experience and education
/// sections respectively. A missing section finds nothing.
pub fn find_indicators(
    resume: &ResumeData,
    experience_keywords: &[WholeWord],
    education_keywords: &[WholeWord],
) -> IndicatorHits {
    IndicatorHits {
        experience: find_whole_words(experience_keywords, &resume.joined_text(EXPERIENCE)),
        education: find_whole_words(education_keywords, &resume.joined_text(EDUCATION)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::sections::compile_all;
    use crate::scoring::tokenize::tokenize;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_frequency_counts_exact_tokens_only() {
        let tokens = tokenize("Python python PYTHON pythonic; docker");
        let freq = skill_frequency(&owned(&["Python", "docker", "java"]), &tokens);
        assert_eq!(freq["Python"], 3);
        assert_eq!(freq["docker"], 1);
        assert_eq!(freq["java"], 0);
    }

    #[test]
    fn test_frequency_of_multi_word_skill_is_zero() {
        let tokens = tokenize("machine learning machine learning");
        let freq = skill_frequency(&owned(&["machine learning"]), &tokens);
        assert_eq!(freq["machine learning"], 0);
    }

    #[test]
    fn test_indicators_found_in_their_own_sections() {
        let resume = ResumeData::new()
            .with_section("experience", vec!["Developed APIs", "Deployed to prod"])
            .with_section("education", "Bachelor of Computer Science");
        let hits = find_indicators(
            &resume,
            &compile_all(&owned(&["developed", "built", "deployed"])),
            &compile_all(&owned(&["bachelor", "master", "computer science"])),
        );
        assert_eq!(hits.experience, vec!["developed", "deployed"]);
        assert_eq!(hits.education, vec!["bachelor", "computer science"]);
    }

    #[test]
    fn test_indicators_not_read_from_other_sections() {
        let resume = ResumeData::new().with_section("projects", "Built a master plan");
        let hits = find_indicators(
            &resume,
            &compile_all(&owned(&["built"])),
            &compile_all(&owned(&["master"])),
        );
        assert_eq!(hits, IndicatorHits::default());
    }
}
