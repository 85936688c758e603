//! TF-IDF cosine similarity between a resume and a job description

use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Tokens of two or more word characters.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid token regex"));

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all",
    "almost", "alone", "along", "already", "also", "although", "always", "am", "among",
    "amongst", "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone",
    "anything", "anyway", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "becoming", "been", "before", "beforehand", "behind",
    "being", "below", "beside", "besides", "between", "beyond", "bill", "both", "bottom",
    "but", "by", "call", "can", "cannot", "cant", "co", "con", "could", "couldnt", "cry",
    "de", "describe", "detail", "do", "done", "down", "due", "during", "each", "eg", "eight",
    "either", "eleven", "else", "elsewhere", "empty", "enough", "etc", "even", "ever",
    "every", "everyone", "everything", "everywhere", "except", "few", "fifteen", "fifty",
    "fill", "find", "fire", "first", "five", "for", "former", "formerly", "forty", "found",
    "four", "from", "front", "full", "further", "get", "give", "go", "had", "has", "hasnt",
    "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein", "hereupon",
    "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie",
    "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "keep",
    "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless",
    "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now",
    "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere",
    "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that",
    "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout", "thru", "thus",
    "to", "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

type TermCounts = BTreeMap<String, f64>;

/// Scores how closely a resume matches a job description on a 0-100 scale.
///
/// Both texts form the whole corpus: terms are weighted by raw count times a
/// smoothed inverse document frequency, vectors are L2-normalized and the
/// cosine is scaled to a percentage rounded to two decimals.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    default_score: f64,
}

impl SimilarityScorer {
    pub fn new(default_score: f64) -> Self {
        Self { default_score }
    }

    pub fn score(&self, resume_text: &str, job_description: &str) -> f64 {
        if job_description.trim().is_empty() {
            debug!("No job description, using default score {}", self.default_score);
            return self.default_score;
        }

        let resume = Self::term_counts(resume_text);
        let job = Self::term_counts(job_description);
        if resume.is_empty() || job.is_empty() {
            debug!("Empty vocabulary after stop-word removal, score is 0");
            return 0.0;
        }

        let resume_vec = Self::weighted(&resume, &job);
        let job_vec = Self::weighted(&job, &resume);

        let dot: f64 = resume_vec
            .iter()
            .filter_map(|(term, w)| job_vec.get(term).map(|v| w * v))
            .sum();
        let norm = Self::norm(&resume_vec) * Self::norm(&job_vec);
        if norm == 0.0 {
            return 0.0;
        }

        let score = ((dot / norm) * 100.0).clamp(0.0, 100.0);
        let rounded = (score * 100.0).round() / 100.0;
        debug!("TF-IDF similarity: {}", rounded);
        rounded
    }

    fn term_counts(text: &str) -> TermCounts {
        let lower = text.to_lowercase();
        let mut counts = TermCounts::new();
        for token in TOKEN_REGEX.find_iter(&lower).map(|m| m.as_str()) {
            if !STOP_WORDS.contains(token) {
                *counts.entry(token.to_string()).or_insert(0.0) += 1.0;
            }
        }
        counts
    }

    /// Weight `counts` against a two-document corpus made of it and `other`.
    fn weighted(counts: &TermCounts, other: &TermCounts) -> TermCounts {
        const DOCUMENTS: f64 = 2.0;
        counts
            .iter()
            .map(|(term, tf)| {
                let df = if other.contains_key(term) { 2.0 } else { 1.0 };
                let idf = ((1.0 + DOCUMENTS) / (1.0 + df)).ln() + 1.0;
                (term.clone(), tf * idf)
            })
            .collect()
    }

    fn norm(vector: &TermCounts) -> f64 {
        vector.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(75.0)
    }
}
