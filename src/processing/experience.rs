//! Years-of-experience detection

use crate::error::{Result, ResumeAnalyzerError};
use log::debug;
use regex::Regex;

const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(?i)(\d+)\s*(?:years?|yrs?)\s*(?:of)?\s*experience",
    r"(?i)experience\s*:\s*(\d+)\s*(?:years?|yrs?)",
    r"(?i)(\d+)\+?\s*(?:years?|yrs?)\s*in",
];

pub struct ExperienceExtractor {
    patterns: Vec<Regex>,
}

impl ExperienceExtractor {
    pub fn new() -> Result<Self> {
        let patterns = EXPERIENCE_PATTERNS
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| {
                    ResumeAnalyzerError::Processing(format!("Invalid experience pattern: {}", e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Largest year count stated anywhere in the text, or 0 if none is.
    ///
    /// All patterns contribute to the pool, so "5 years of experience" and
    /// "3 years in sales" yield 5 and the smaller figure is dropped.
    pub fn extract_experience(&self, text: &str) -> u32 {
        let years = self
            .patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        debug!("Detected {} years of experience", years);
        years
    }
}
