use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional section names produced by document extraction.
pub const SKILLS: &str = "skills";
pub const EXPERIENCE: &str = "experience";
pub const PROJECTS: &str = "projects";
pub const EDUCATION: &str = "education";
pub const CERTIFICATIONS: &str = "certifications";

/// The value stored under one résumé section.
///
/// Extraction hands us either a list of text items or a single blob. Anything
/// else (numbers, objects, lists holding non-strings) lands in `Unsupported`
/// and contributes nothing to scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionValue {
    List(Vec<String>),
    Text(String),
    Unsupported(Value),
}

impl SectionValue {
    /// The individual text items of the section, in order.
    pub fn items(&self) -> Vec<&str> {
        match self {
            SectionValue::List(items) => items.iter().map(String::as_str).collect(),
            SectionValue::Text(text) => vec![text.as_str()],
            SectionValue::Unsupported(_) => Vec::new(),
        }
    }

    /// List items joined with a single space, or the blob itself.
    /// `None` for unsupported shapes.
    pub fn joined(&self) -> Option<String> {
        match self {
            SectionValue::List(items) => Some(items.join(" ")),
            SectionValue::Text(text) => Some(text.clone()),
            SectionValue::Unsupported(_) => None,
        }
    }
}

impl From<Vec<String>> for SectionValue {
    fn from(items: Vec<String>) -> Self {
        SectionValue::List(items)
    }
}

impl From<Vec<&str>> for SectionValue {
    fn from(items: Vec<&str>) -> Self {
        SectionValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for SectionValue {
    fn from(text: &str) -> Self {
        SectionValue::Text(text.to_string())
    }
}

/// Structured résumé as supplied by document extraction: section name → value.
/// Absent sections are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeData {
    sections: BTreeMap<String, SectionValue>,
}

impl ResumeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with_section(mut self, name: impl Into<String>, value: impl Into<SectionValue>) -> Self {
        self.sections.insert(name.into(), value.into());
        self
    }

    pub fn section(&self, name: &str) -> Option<&SectionValue> {
        self.sections.get(name)
    }

    /// Every section, ordered by name.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionValue)> {
        self.sections.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// List-form items of a section. Blobs and unsupported shapes yield nothing.
    pub fn list_items(&self, name: &str) -> &[String] {
        match self.sections.get(name) {
            Some(SectionValue::List(items)) => items,
            _ => &[],
        }
    }

    /// A section's text ready for whole-word search. Missing or unsupported ⇒ empty.
    pub fn joined_text(&self, name: &str) -> String {
        self.sections
            .get(name)
            .and_then(SectionValue::joined)
            .unwrap_or_default()
    }
}
