//! Integration tests for the resume analyzer

mod common;

use resume_analyzer::config::{Config, InputConfig};
use resume_analyzer::input::{FileType, InputManager};
use resume_analyzer::processing::text_processor::TextProcessor;
use resume_analyzer::{AnalysisPipeline, ResumeAnalyzerError};
use std::path::Path;

const RESUME_LINES: &[&str] = &[
    "Jane Smith",
    "Skills: Python, Java, SQL",
    "3 years of experience in data engineering.",
    "Bachelor of Science in Computer Science from State University.",
];

fn pipeline() -> AnalysisPipeline {
    AnalysisPipeline::from_config(&Config::default()).unwrap()
}

fn normalized(text: &str) -> String {
    TextProcessor::new().normalize(text)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::default();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.md");
    std::fs::write(&path, "# Jane").unwrap();

    let err = InputManager::default().load_document(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAnalyzerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_extension_outside_allow_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.doc");
    std::fs::write(&path, b"\xD0\xCF\x11\xE0").unwrap();

    let config = InputConfig {
        allowed_extensions: vec!["pdf".to_string(), "txt".to_string()],
        ..InputConfig::default()
    };
    let err = InputManager::new(config).load_document(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAnalyzerError::UnsupportedFormat(_)));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::default();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let err = manager.load_document(path).await.unwrap_err();
    assert!(matches!(err, ResumeAnalyzerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_empty_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "").unwrap();

    let err = InputManager::default().load_document(&path).await.unwrap_err();
    assert!(matches!(err, ResumeAnalyzerError::InvalidInput(_)));
}

#[tokio::test]
async fn test_oversized_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    std::fs::write(&path, "x".repeat(2048)).unwrap();

    let config = InputConfig {
        max_file_size_bytes: 1024,
        ..InputConfig::default()
    };
    let err = InputManager::new(config).load_document(&path).await.unwrap_err();
    assert!(err.to_string().contains("limit is 1024 bytes"));
}

#[tokio::test]
async fn test_job_description_reading() {
    let manager = InputManager::default();
    assert_eq!(manager.read_job_description(None).await.unwrap(), "");

    let job = manager
        .read_job_description(Some(Path::new("tests/fixtures/job_description.txt")))
        .await
        .unwrap();
    assert!(job.contains("Kubernetes"));
}

#[tokio::test]
async fn test_fixture_resume_against_job() {
    let manager = InputManager::default();
    let document = manager
        .load_document(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job = manager
        .read_job_description(Some(Path::new("tests/fixtures/job_description.txt")))
        .await
        .unwrap();

    let result = pipeline().analyze_document(&document, &job).unwrap();
    let analysis = &result.analysis;

    for skill in ["aws", "django", "docker", "kubernetes", "node.js", "python", "rest api"] {
        assert!(analysis.skills_found.contains(&skill.to_string()), "missing {}", skill);
    }
    assert_eq!(analysis.experience_years, 6);
    assert!(analysis
        .education
        .iter()
        .any(|e| e.starts_with("education bachelor of science in computer science")));
    assert!(analysis.match_score > 0.0 && analysis.match_score < 100.0);
    assert!(analysis.recommendations.contains(
        &"Consider adding these skills mentioned in the job description: graphql, java".to_string()
    ));
}

#[test]
fn test_plain_text_end_to_end() {
    let text = RESUME_LINES.join("\n");
    let result = pipeline().analyze(text.as_bytes(), FileType::Text, "").unwrap();
    let analysis = &result.analysis;

    assert!(result.success);
    assert!(analysis.skills_found.contains(&"python".to_string()));
    assert!(analysis.skills_found.contains(&"java".to_string()));
    assert_eq!(analysis.experience_years, 3);
    assert!(analysis
        .education
        .contains(&"bachelor of science in computer science from state university.".to_string()));
    assert_eq!(analysis.match_score, 75.0);
}

#[test]
fn test_docx_round_trip() {
    let bytes = common::build_docx(RESUME_LINES);
    let text = resume_analyzer::input::DocumentTextExtractor::default()
        .extract(&bytes, FileType::Docx)
        .unwrap();
    assert_eq!(normalized(&text), normalized(&RESUME_LINES.join("\n")));

    let result = pipeline().analyze(&bytes, FileType::Docx, "").unwrap();
    assert_eq!(result.analysis.experience_years, 3);
    assert_eq!(result.analysis.skills_found, vec!["java", "python", "sql"]);
}

#[test]
fn test_pdf_round_trip() {
    let bytes = common::build_pdf(&[&RESUME_LINES[..2], &RESUME_LINES[2..]]);
    let text = resume_analyzer::input::DocumentTextExtractor::default()
        .extract(&bytes, FileType::Pdf)
        .unwrap();

    let text = normalized(&text);
    for line in RESUME_LINES {
        assert!(text.contains(&normalized(line)), "{:?} not in {:?}", line, text);
    }

    let result = pipeline().analyze(&bytes, FileType::Pdf, "").unwrap();
    assert_eq!(result.analysis.experience_years, 3);
    assert!(result.analysis.skills_found.contains(&"python".to_string()));
}

#[test]
fn test_corrupt_documents_fail_cleanly() {
    let pipeline = pipeline();
    for file_type in [FileType::Pdf, FileType::Docx] {
        let err = pipeline.analyze(b"garbage bytes", file_type, "").unwrap_err();
        assert!(err.is_extraction(), "{} should fail extraction", file_type);
    }
}

#[test]
fn test_pipeline_shared_across_threads() {
    let pipeline = std::sync::Arc::new(pipeline());
    let text = RESUME_LINES.join("\n");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pipeline = std::sync::Arc::clone(&pipeline);
            let text = text.clone();
            std::thread::spawn(move || pipeline.analyze(text.as_bytes(), FileType::Text, "python").unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
