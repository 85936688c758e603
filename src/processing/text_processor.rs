//! Text normalization and sentence segmentation

use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// A full stop followed by whitespace. UAX #29 does not break there when the
/// next word is lower-case, which is always the case in normalized text.
static PERIOD_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+").expect("Invalid period regex"));

/// Anything that is not a word character, whitespace or sentence punctuation.
static NON_LINGUISTIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:]").expect("Invalid punctuation regex"));

#[derive(Debug, Clone, Default)]
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Collapse whitespace, strip non-linguistic characters, lower-case and trim.
    ///
    /// Sentence punctuation (`. , ! ? ; :`) survives so the text can still be
    /// split into sentences afterwards.
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = WHITESPACE_REGEX.replace_all(text, " ");
        let stripped = NON_LINGUISTIC_REGEX.replace_all(&collapsed, "");
        // Stripping can join two spaces around a removed symbol ("a - b")
        let collapsed = WHITESPACE_REGEX.replace_all(&stripped, " ");
        collapsed.to_lowercase().trim().to_string()
    }

    /// Split text into sentences using Unicode sentence boundaries, plus a
    /// break after every full stop followed by whitespace.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .flat_map(Self::split_after_periods)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn split_after_periods(sentence: &str) -> Vec<&str> {
        let mut pieces = Vec::new();
        let mut start = 0;
        for m in PERIOD_BREAK_REGEX.find_iter(sentence) {
            pieces.push(&sentence[start..m.start() + 1]);
            start = m.end();
        }
        pieces.push(&sentence[start..]);
        pieces
    }

    pub fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
