//! Input processing module
//! Handles format detection, text extraction, and reading documents from disk

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::FileType;
pub use manager::InputManager;
pub use text_extractor::DocumentTextExtractor;
