//! Resume analyzer: skill, experience and education extraction with job matching

use clap::Parser;
use log::{error, info};
use resume_analyzer::cli::{self, Cli, Commands, ConfigAction};
use resume_analyzer::config::Config;
use resume_analyzer::input::InputManager;
use resume_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use resume_analyzer::output::AnalysisReport;
use resume_analyzer::processing::analyzer::AnalysisPipeline;
use resume_analyzer::processing::skill_matcher::SkillMatcher;
use resume_analyzer::{Result, ResumeAnalyzerError};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration; repair commands run without it
    let config = match (&cli.config, cli.command.requires_config()) {
        (_, false) => Ok(Config::default()),
        (Some(path), true) => Config::load_from(path),
        (None, true) => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume analysis");

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeAnalyzerError::InvalidInput)?,
                None => config.output.format.clone(),
            };
            let detailed = detailed || config.output.detailed;

            let input_manager = InputManager::new(config.input.clone());
            let document = input_manager.load_document(&resume).await?;

            let (job_description, job_source) = match (&job, job_text) {
                (Some(path), _) => {
                    let text = input_manager.read_job_description(Some(path)).await?;
                    (text, Some(display_name(path)))
                }
                (None, Some(text)) => (text, Some("inline".to_string())),
                (None, None) => (String::new(), None),
            };
            // A whitespace-only job description counts as absent
            let job_source = job_source.filter(|_| !job_description.trim().is_empty());

            let pipeline = AnalysisPipeline::from_config(&config)?;
            let result = pipeline.analyze_document(&document, &job_description)?;
            drop(document);

            let report = AnalysisReport::new(result, display_name(&resume), job_source);
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    let path = if path.is_dir() {
                        path.join(suggest_filename(&output_format, &report.metadata.resume_file, true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills => {
            let matcher = SkillMatcher::new(&config.vocabulary.skills)?;
            println!("🧰 Skill vocabulary ({} entries)\n", matcher.skill_count());
            for skill in matcher.vocabulary() {
                println!("  • {}", skill);
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
