//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub scoring: ScoringConfig,
    pub recommendations: RecommendationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Fixed lookup tables shared read-only by the extractors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub skills: Vec<String>,
    pub education_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Reported when no job description is supplied
    pub default_match_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub min_skills: usize,
    pub min_word_count: usize,
    pub max_word_count: usize,
    pub max_missing_skills: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_size_bytes: u64,
    pub allowed_extensions: Vec<String>,
    /// External program used for legacy `.doc` files; receives the file path
    /// as its last argument and must print plain text to stdout.
    pub doc_converter: String,
    pub doc_converter_args: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift",
    "html", "css", "react", "angular", "vue", "node.js", "django", "flask",
    "machine learning", "deep learning", "ai", "data analysis", "sql",
    "mongodb", "postgresql", "aws", "azure", "docker", "kubernetes",
    "git", "jenkins", "ci/cd", "rest api", "graphql", "agile", "scrum",
];

pub const DEFAULT_EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "bs", "ms", "mba",
    "university", "college", "degree", "graduated",
];

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            education_keywords: DEFAULT_EDUCATION_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self { default_match_score: 75.0 }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            min_skills: 5,
            min_word_count: 200,
            max_word_count: 800,
            max_missing_skills: 3,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 16 * 1024 * 1024,
            allowed_extensions: ["pdf", "docx", "doc", "txt"].iter().map(|s| s.to_string()).collect(),
            doc_converter: "antiword".to_string(),
            doc_converter_args: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig::default(),
            scoring: ScoringConfig::default(),
            recommendations: RecommendationConfig::default(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load from an explicit file. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if self.vocabulary.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ResumeAnalyzerError::Configuration(
                "skill vocabulary contains an empty entry".to_string(),
            ));
        }
        if self.recommendations.min_word_count > self.recommendations.max_word_count {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "min_word_count ({}) exceeds max_word_count ({})",
                self.recommendations.min_word_count, self.recommendations.max_word_count
            )));
        }
        if !(0.0..=100.0).contains(&self.scoring.default_match_score) {
            return Err(ResumeAnalyzerError::Configuration(format!(
                "default_match_score must be within 0-100, got {}",
                self.scoring.default_match_score
            )));
        }
        Ok(())
    }
}
