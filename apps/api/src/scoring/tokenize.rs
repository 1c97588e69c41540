//! Content flattening: turns the matchable résumé sections into one lowercase token stream.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::resume::{ResumeData, CERTIFICATIONS, EDUCATION, EXPERIENCE, PROJECTS, SKILLS};

/// Sections whose text feeds fuzzy and frequency matching, in flattening order.
/// Any other key (e.g. `raw_text`) is ignored here.
pub const FLATTENED_SECTIONS: [&str; 5] = [SKILLS, EXPERIENCE, PROJECTS, EDUCATION, CERTIFICATIONS];

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Lowercases `text` and splits it into runs of word characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    word_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Flattened content: tokens of every item of every flattened section, in
/// section then item order. Duplicates are kept.
pub fn flatten_content(resume: &ResumeData) -> Vec<String> {
    let mut tokens = Vec::new();
    for name in FLATTENED_SECTIONS {
        if let Some(value) = resume.section(name) {
            for item in value.items() {
                tokens.extend(tokenize(item));
            }
        }
    }
    tokens
}
