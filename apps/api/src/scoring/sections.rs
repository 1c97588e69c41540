//! Whole-word keyword matching and per-section skill localisation.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::models::resume::ResumeData;

/// Case-insensitive, word-boundary anchored literal match for one keyword.
#[derive(Debug, Clone)]
pub struct WholeWord {
    keyword: String,
    pattern: Regex,
}

impl WholeWord {
    /// The keyword is escaped, so characters like `+` or `.` are literal.
    pub fn new(keyword: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Compiles a matcher per keyword, keeping input order. A keyword whose
/// pattern cannot be built is logged and never matches.
pub fn compile_all(keywords: &[String]) -> Vec<WholeWord> {
    keywords
        .iter()
        .filter_map(|kw| match WholeWord::new(kw) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                warn!("Skipping keyword '{kw}': {e}");
                None
            }
        })
        .collect()
}

/// Keywords (in input order) that occur as whole words in `text`.
pub fn find_whole_words(matchers: &[WholeWord], text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    matchers
        .iter()
        .filter(|m| m.is_match(text))
        .map(|m| m.keyword().to_string())
        .collect()
}

/// For every section of the résumé (no fixed set), the required skills that
/// appear verbatim in it. Sections without a hit are left out of the map.
pub fn localize_skills(resume: &ResumeData, skills: &[WholeWord]) -> BTreeMap<String, Vec<String>> {
    let mut by_section = BTreeMap::new();
    for (name, value) in resume.sections() {
        let Some(text) = value.joined() else {
            continue;
        };
        let hits = find_whole_words(skills, &text.to_lowercase());
        if !hits.is_empty() {
            by_section.insert(name.to_string(), hits);
        }
    }
    by_section
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn matchers(words: &[&str]) -> Vec<WholeWord> {
        compile_all(&words.iter().map(|w| w.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_whole_word_respects_boundaries() {
        let java = WholeWord::new("java").unwrap();
        assert!(java.is_match("java, python"));
        assert!(java.is_match("Senior JAVA dev"));
        assert!(!java.is_match("javascript"));
        assert!(!java.is_match("myjava"));
    }

    #[test]
    fn test_special_characters_are_literal() {
        let dotnet = WholeWord::new("asp.net").unwrap();
        assert!(dotnet.is_match("built asp.net services"));
        assert!(!dotnet.is_match("aspxnet"));

        let cpp = WholeWord::new("c++").unwrap();
        assert!(!cpp.is_match("c"));
        assert!(cpp.is_match("c++x"));
    }

    #[test]
    fn test_multi_word_keyword_matches_phrase() {
        let ml = WholeWord::new("machine learning").unwrap();
        assert!(ml.is_match("applied machine learning at scale"));
        assert!(!ml.is_match("machine-learning"));
    }

    #[test]
    fn test_localize_omits_sections_without_hits() {
        let resume = ResumeData::new()
            .with_section("skills", vec!["Python", "Docker"])
            .with_section("projects", vec!["Garden planner"])
            .with_section("experience", "Shipped Docker images");
        let found = localize_skills(&resume, &matchers(&["python", "docker", "java"]));

        assert_eq!(found.get("skills"), Some(&vec!["python".to_string(), "docker".to_string()]));
        assert_eq!(found.get("experience"), Some(&vec!["docker".to_string()]));
        assert!(!found.contains_key("projects"));
    }

    #[test]
    fn test_localize_considers_every_section_key() {
        let resume = ResumeData::new().with_section("raw_text", "Python developer");
        let found = localize_skills(&resume, &matchers(&["python"]));
        assert_eq!(found.get("raw_text"), Some(&vec!["python".to_string()]));
    }

    #[test]
    fn test_localize_skips_malformed_sections() {
        let resume: ResumeData = serde_json::from_value(json!({
            "skills": {"python": true},
            "experience_years": 5
        }))
        .unwrap();
        assert!(localize_skills(&resume, &matchers(&["python", "5"])).is_empty());
    }

    #[test]
    fn test_list_items_joined_before_matching() {
        let resume = ResumeData::new().with_section("skills", vec!["user", "research"]);
        let found = localize_skills(&resume, &matchers(&["user research"]));
        assert_eq!(found.get("skills"), Some(&vec!["user research".to_string()]));
    }
}
