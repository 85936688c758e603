//! Fixed-vocabulary skill matching

use crate::error::{Result, ResumeAnalyzerError};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::BTreeSet;

/// Finds vocabulary skills by plain substring containment.
///
/// Matching is overlapping, so `java` is reported for a text that only says
/// `javascript`, and short entries like `ai` match inside unrelated words.
/// Both are accepted limitations of substring search.
pub struct SkillMatcher {
    matcher: AhoCorasick,
    skills: Vec<String>,
}

impl SkillMatcher {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self> {
        let skills: Vec<String> = vocabulary
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&skills)
            .map_err(|e| ResumeAnalyzerError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { matcher, skills })
    }

    /// Skills found in `text`, deduplicated and in alphabetical order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        let found: BTreeSet<&str> = self
            .matcher
            .find_overlapping_iter(&text)
            .map(|m| self.skills[m.pattern().as_usize()].as_str())
            .collect();

        found.into_iter().map(str::to_string).collect()
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.skills
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
