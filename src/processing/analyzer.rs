//! Analysis pipeline: document bytes in, structured report out

use crate::config::Config;
use crate::error::Result;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::DocumentTextExtractor;
use crate::processing::document::Document;
use crate::processing::education::EducationExtractor;
use crate::processing::experience::ExperienceExtractor;
use crate::processing::recommendations::RecommendationEngine;
use crate::processing::similarity::SimilarityScorer;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::text_processor::TextProcessor;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Runs every extractor over one document. Holds only immutable lookup
/// tables and compiled patterns, so one instance can serve many threads.
pub struct AnalysisPipeline {
    extractor: DocumentTextExtractor,
    text_processor: TextProcessor,
    skill_matcher: Arc<SkillMatcher>,
    experience_extractor: ExperienceExtractor,
    education_extractor: EducationExtractor,
    similarity_scorer: SimilarityScorer,
    recommendation_engine: RecommendationEngine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub analysis: AnalysisDetails,
    pub metadata: AnalysisMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub skills_found: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    /// 0-100, or the configured default when no job description was given
    pub match_score: f64,
    pub word_count: usize,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub skills_count: usize,
    pub education_count: usize,
}

impl AnalysisPipeline {
    pub fn from_config(config: &Config) -> Result<Self> {
        let skill_matcher = Arc::new(SkillMatcher::new(&config.vocabulary.skills)?);

        Ok(Self {
            extractor: DocumentTextExtractor::from_config(&config.input),
            text_processor: TextProcessor::new(),
            experience_extractor: ExperienceExtractor::new()?,
            education_extractor: EducationExtractor::new(&config.vocabulary.education_keywords),
            similarity_scorer: SimilarityScorer::new(config.scoring.default_match_score),
            recommendation_engine: RecommendationEngine::new(
                config.recommendations.clone(),
                Arc::clone(&skill_matcher),
            ),
            skill_matcher,
        })
    }

    pub fn analyze_document(&self, document: &Document, job_description: &str) -> Result<AnalysisResult> {
        info!("Analyzing {} ({} bytes)", document.file_name, document.size());
        self.analyze(&document.content, document.file_type, job_description)
    }

    /// Any stage failure aborts the whole call.
    pub fn analyze(&self, bytes: &[u8], file_type: FileType, job_description: &str) -> Result<AnalysisResult> {
        let start_time = Instant::now();

        info!("Extracting text from {} document", file_type);
        let raw_text = self.extractor.extract(bytes, file_type)?;
        let text = self.text_processor.normalize(&raw_text);
        debug!("Normalized text: {} chars", text.len());

        info!("Extracting resume features");
        let skills_found = self.skill_matcher.extract_skills(&text);
        let experience_years = self.experience_extractor.extract_experience(&text);
        let education = self.education_extractor.extract_education(&text);
        debug!(
            "Found {} skills, {} years, {} education mentions",
            skills_found.len(),
            experience_years,
            education.len()
        );

        info!("Scoring against job description");
        let match_score = self.similarity_scorer.score(&text, job_description);

        let word_count = self.text_processor.word_count(&text);
        let recommendations = self.recommendation_engine.recommend(
            &skills_found,
            experience_years,
            word_count,
            job_description,
        );

        info!(
            "Analysis finished in {} ms, match score {:.2}",
            start_time.elapsed().as_millis(),
            match_score
        );

        Ok(AnalysisResult {
            success: true,
            metadata: AnalysisMetadata {
                skills_count: skills_found.len(),
                education_count: education.len(),
            },
            analysis: AnalysisDetails {
                skills_found,
                experience_years,
                education,
                match_score,
                word_count,
                recommendations,
            },
        })
    }
}
