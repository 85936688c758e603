//! Input manager: reads documents from disk and validates them before analysis

use crate::config::InputConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::DocumentTextExtractor;
use crate::processing::document::Document;
use log::info;
use std::path::Path;
use tokio::fs;

pub struct InputManager {
    config: InputConfig,
    extractor: DocumentTextExtractor,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        let extractor = DocumentTextExtractor::from_config(&config);
        Self { config, extractor }
    }

    /// Read a resume from disk, enforcing the extension allow-list and size limit.
    pub async fn load_document(&self, path: &Path) -> Result<Document> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let size = fs::metadata(path).await?.len();
        if size == 0 {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File is empty: {}",
                path.display()
            )));
        }
        if size > self.config.max_file_size_bytes {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File {} is {} bytes, limit is {} bytes",
                path.display(),
                size,
                self.config.max_file_size_bytes
            )));
        }

        info!("Reading {} document: {}", file_type, path.display());
        let content = fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Document::new(content, file_type, file_name))
    }

    /// Read and extract in one go, for job descriptions and previews.
    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        let document = self.load_document(path).await?;
        self.extractor.extract(&document.content, document.file_type)
    }

    /// Job descriptions are plain text; an absent path means "no job description".
    pub async fn read_job_description(&self, path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Ok(fs::read_to_string(path).await.map_err(|e| {
                ResumeAnalyzerError::InvalidInput(format!(
                    "Cannot read job description {}: {}",
                    path.display(),
                    e
                ))
            })?),
            None => Ok(String::new()),
        }
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        let file_type = FileType::from_extension(extension);
        let allowed = self
            .config
            .allowed_extensions
            .iter()
            .any(|a| a.eq_ignore_ascii_case(extension));

        if file_type == FileType::Unknown || !allowed {
            return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                "Unsupported file extension: .{}. Allowed: {}",
                extension,
                self.config.allowed_extensions.join(", ")
            )));
        }
        Ok(file_type)
    }
}
