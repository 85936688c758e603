//! Report structures and output formatters

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::AnalysisReport;
