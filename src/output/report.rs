//! Report structures wrapping an analysis result with presentation data

use crate::processing::analyzer::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// An analysis result plus what the formatters need to present it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub summary: ReportSummary,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Match score rounded to a whole percentage
    pub score_percentage: u8,
    pub verdict: String,
    pub job_description_provided: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub analyzer_version: String,
    pub resume_file: String,
    /// File name of the job description, `inline` for text passed on the
    /// command line, `None` when there was none
    pub job_source: Option<String>,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, resume_file: impl Into<String>, job_source: Option<String>) -> Self {
        let summary = Self::create_summary(&result, job_source.is_some());
        Self {
            result,
            summary,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.into(),
                job_source,
            },
        }
    }

    fn create_summary(result: &AnalysisResult, job_description_provided: bool) -> ReportSummary {
        let score_percentage = result.analysis.match_score.round().clamp(0.0, 100.0) as u8;

        let verdict = if !job_description_provided {
            "No job description provided - score is the default estimate".to_string()
        } else {
            match score_percentage {
                80..=100 => "Strong textual match with the job description".to_string(),
                60..=79 => "Good match - some targeted improvements recommended".to_string(),
                40..=59 => "Fair match - tailor the wording to the role".to_string(),
                20..=39 => "Weak match - significant rewording needed".to_string(),
                _ => "Little overlap with the job description".to_string(),
            }
        };

        ReportSummary {
            score_percentage,
            verdict,
            job_description_provided,
        }
    }
}
