//! Raw uploaded document

use crate::input::file_detector::FileType;

/// Raw document bytes plus their declared format. Owned by a single
/// analysis call and dropped once its text has been extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub content: Vec<u8>,
    pub file_type: FileType,
    pub file_name: String,
}

impl Document {
    pub fn new(content: Vec<u8>, file_type: FileType, file_name: impl Into<String>) -> Self {
        Self {
            content,
            file_type,
            file_name: file_name.into(),
        }
    }

    /// Plain-text document built in memory, mostly useful for callers that
    /// already hold the resume as a string.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec(), FileType::Text, "inline.txt")
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
