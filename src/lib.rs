//! Resume analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use error::{Result, ResumeAnalyzerError};
pub use config::Config;
pub use processing::analyzer::{AnalysisPipeline, AnalysisResult};
