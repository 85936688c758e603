//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable, corrupt or undecodable document. Fatal for the analysis.
    #[error("Error extracting text: {0}")]
    Extraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

impl ResumeAnalyzerError {
    /// True for failures caused by the document itself rather than the caller.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            ResumeAnalyzerError::Extraction(_) | ResumeAnalyzerError::UnsupportedFormat(_)
        )
    }
}

/// A broken `.docx` container is a document problem, not an I/O one
impl From<zip::result::ZipError> for ResumeAnalyzerError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeAnalyzerError::Extraction(format!("invalid docx container: {}", err))
    }
}
