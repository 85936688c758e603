//! Output formatters: colored console, JSON and Markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Emits the bare analysis record, for scripting
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn format_timestamp(report: &AnalysisReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::BrightGreen),
            40..=59 => ("FAIR", Color::Yellow),
            20..=39 => ("WEAK", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_list(&self, items: &[String], empty: &str) -> String {
        if items.is_empty() {
            return format!("  {}\n", self.colorize(empty, Color::BrightBlack));
        }
        items.iter().map(|item| format!("  • {}\n", item)).collect()
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.result.analysis;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {}\n",
            format_timestamp(report),
            report.metadata.resume_file
        ));

        output.push_str(&self.format_header("Job Match", 2));
        let badge = if report.summary.job_description_provided {
            self.format_score_badge(report.summary.score_percentage)
        } else {
            self.colorize("[DEFAULT]", Color::BrightBlack)
        };
        output.push_str(&format!("Match Score: {:.2}% {}\n", analysis.match_score, badge));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));

        output.push_str(&self.format_header("Profile", 2));
        output.push_str(&format!("Experience: {} years\n", analysis.experience_years));
        output.push_str(&format!("Word count: {}\n", analysis.word_count));
        output.push_str(&format!(
            "Skills ({}): {}\n",
            report.result.metadata.skills_count,
            if analysis.skills_found.is_empty() {
                self.colorize("none detected", Color::BrightBlack)
            } else {
                self.colorize(&analysis.skills_found.join(", "), Color::Green)
            }
        ));

        if self.detailed {
            output.push_str(&self.format_header(
                &format!("Education ({})", report.result.metadata.education_count),
                3,
            ));
            output.push_str(&self.format_list(&analysis.education, "No education mentions found"));
        }

        output.push_str(&self.format_header("Recommendations", 2));
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        if self.detailed {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize(
                    &format!(
                        "resume-analyzer v{} | job description: {}",
                        report.metadata.analyzer_version,
                        report.metadata.job_source.as_deref().unwrap_or("none")
                    ),
                    Color::BrightBlack
                )
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(&report.result)?)
        } else {
            Ok(serde_json::to_string(&report.result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            80..=100 => "🟢 Strong",
            60..=79 => "🟡 Good",
            40..=59 => "🟠 Fair",
            20..=39 => "🔴 Weak",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.result.analysis;
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n", format_timestamp(report)));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job description:** `{}`\n\n",
                report.metadata.resume_file,
                report.metadata.job_source.as_deref().unwrap_or("none")
            ));
        }

        output.push_str("## Job Match\n\n");
        let badge = if report.summary.job_description_provided {
            Self::markdown_score_badge(report.summary.score_percentage)
        } else {
            "⚪ Default"
        };
        output.push_str(&format!("**Match Score:** {:.2}% {}\n\n", analysis.match_score, badge));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        output.push_str("## Profile\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!("| Experience | {} years |\n", analysis.experience_years));
        output.push_str(&format!("| Word count | {} |\n", analysis.word_count));
        output.push_str(&format!("| Skills | {} |\n", report.result.metadata.skills_count));
        output.push_str(&format!("| Education mentions | {} |\n\n", report.result.metadata.education_count));

        if !analysis.skills_found.is_empty() {
            output.push_str("### Skills\n\n");
            for skill in &analysis.skills_found {
                output.push_str(&format!("- `{}`\n", skill));
            }
            output.push('\n');
        }

        if !analysis.education.is_empty() {
            output.push_str("### Education\n\n");
            for entry in &analysis.education {
                output.push_str(&format!("> {}\n\n", entry));
            }
        }

        output.push_str("## Recommendations\n\n");
        for (i, rec) in analysis.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}
