//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume analysis: skills, experience, education and job match")]
#[command(long_about = "Extract skills, years of experience and education from a PDF, DOCX, DOC or TXT resume, score it against a job description with TF-IDF similarity and suggest improvements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume, optionally against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, DOC, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a plain-text job description
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include education details and report metadata
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the skill vocabulary
    Skills,

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

impl Commands {
    /// `config reset` and `config path` must work even when the current
    /// configuration file does not parse.
    pub fn requires_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config {
                action: Some(ConfigAction::Reset | ConfigAction::Path)
            }
        )
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}
