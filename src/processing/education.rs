//! Education mention detection

use crate::processing::text_processor::TextProcessor;

pub const MAX_EDUCATION_ENTRIES: usize = 3;

pub struct EducationExtractor {
    keywords: Vec<String>,
    text_processor: TextProcessor,
}

impl EducationExtractor {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            text_processor: TextProcessor::new(),
        }
    }

    /// First sentences mentioning an education keyword, in document order.
    ///
    /// Keywords are plain substrings, so short ones such as `ms` also fire
    /// inside longer words.
    pub fn extract_education(&self, text: &str) -> Vec<String> {
        self.text_processor
            .split_sentences(text)
            .into_iter()
            .filter(|sentence| self.mentions_education(sentence))
            .take(MAX_EDUCATION_ENTRIES)
            .collect()
    }

    fn mentions_education(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EDUCATION_KEYWORDS;

    fn extractor() -> EducationExtractor {
        EducationExtractor::new(DEFAULT_EDUCATION_KEYWORDS)
    }

    #[test]
    fn test_degree_sentence_found() {
        let text = "john doe. bachelor of science in computer science from state university. likes hiking.";
        let education = extractor().extract_education(text);
        assert_eq!(
            education,
            vec!["bachelor of science in computer science from state university."]
        );
    }

    #[test]
    fn test_at_most_three_in_order() {
        let text = "PhD in Physics. Played chess. MBA from Wharton. Master of Arts. Graduated 2001 from college.";
        let education = extractor().extract_education(text);
        assert_eq!(education.len(), 3);
        assert_eq!(education[0], "PhD in Physics.");
        assert_eq!(education[1], "MBA from Wharton.");
        assert_eq!(education[2], "Master of Arts.");
    }

    #[test]
    fn test_no_mentions() {
        assert!(extractor().extract_education("worked on rust tooling. shipped a cli.").is_empty());
        assert!(extractor().extract_education("").is_empty());
    }
}
