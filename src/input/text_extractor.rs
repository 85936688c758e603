//! Text extraction from various document formats
//!
//! Every extractor works on bytes already held in memory and returns the
//! plain text of the document. Nothing is cached between calls.

use crate::config::InputConfig;
use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use log::{debug, warn};
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::cell::Cell;
use std::io::{Cursor, Read, Write};
use std::panic::UnwindSafe;
use std::process::Command;
use std::sync::{LazyLock, Once};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs instead of returning an error
        let outcome = catch_quietly(|| pdf_extract::extract_text_from_mem(bytes));

        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                return Err(ResumeAnalyzerError::Extraction(format!(
                    "Failed to extract text from PDF: {}",
                    e
                )))
            }
            Err(_) => {
                return Err(ResumeAnalyzerError::Extraction(
                    "Failed to extract text from PDF: malformed document".to_string(),
                ))
            }
        };

        if text.trim().is_empty() {
            warn!("PDF contains no extractable text (scanned pages are not supported)");
        }
        Ok(text)
    }
}

thread_local! {
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// `catch_unwind` that keeps the panic message off stderr. Panics on other
/// threads, or outside `f`, still reach the previously installed hook.
fn catch_quietly<R>(f: impl FnOnce() -> R + UnwindSafe) -> std::thread::Result<R> {
    QUIET_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if QUIET_PANICS.with(Cell::get) {
                debug!("Suppressed panic in document parser: {}", info);
            } else {
                previous(info);
            }
        }));
    });

    QUIET_PANICS.with(|quiet| quiet.set(true));
    let outcome = std::panic::catch_unwind(f);
    QUIET_PANICS.with(|quiet| quiet.set(false));
    outcome
}

pub struct DocxExtractor;

/// Opening, closing or empty `w:txbxContent` tag.
static TEXT_BOX_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)w:txbxContent\b[^>]*?(/?)>").expect("Invalid text box regex")
});

static PARAGRAPH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>(.*?)</w:p>").expect("Invalid paragraph regex")
});

static RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab\s*/>|<w:(?:br|cr)(?:\s[^>]*)?/>")
        .expect("Invalid run regex")
});

static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);").expect("Invalid entity regex")
});

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")?
            .read_to_string(&mut document_xml)
            .map_err(|e| {
                ResumeAnalyzerError::Extraction(format!("Failed to read docx body: {}", e))
            })?;

        Ok(Self::document_xml_to_text(&document_xml))
    }
}

impl DocxExtractor {
    /// One line per body `<w:p>` paragraph, in document order. Text boxes
    /// nest whole paragraphs inside a run and are left out.
    fn document_xml_to_text(xml: &str) -> String {
        let xml = Self::strip_text_boxes(xml);
        let paragraphs: Vec<String> = PARAGRAPH_REGEX
            .captures_iter(&xml)
            .map(|para| match para.get(1) {
                Some(body) => Self::paragraph_text(body.as_str()),
                None => String::new(),
            })
            .collect();

        debug!("docx body holds {} paragraphs", paragraphs.len());
        paragraphs.join("\n")
    }

    fn strip_text_boxes(xml: &str) -> Cow<'_, str> {
        if !TEXT_BOX_TAG_REGEX.is_match(xml) {
            return Cow::Borrowed(xml);
        }

        let mut kept = String::with_capacity(xml.len());
        let mut depth = 0usize;
        let mut last = 0;
        for tag in TEXT_BOX_TAG_REGEX.captures_iter(xml) {
            let Some(whole) = tag.get(0) else { continue };
            if depth == 0 {
                kept.push_str(&xml[last..whole.start()]);
            }
            match (&tag[1], &tag[2]) {
                (_, "/") => {}
                ("/", _) => depth = depth.saturating_sub(1),
                _ => depth += 1,
            }
            last = whole.end();
        }
        if depth == 0 {
            kept.push_str(&xml[last..]);
        }
        Cow::Owned(kept)
    }

    fn paragraph_text(body: &str) -> String {
        let mut text = String::new();
        for run in RUN_REGEX.captures_iter(body) {
            match run.get(1) {
                Some(t) => text.push_str(&decode_entities(t.as_str())),
                None if run[0].starts_with("<w:tab") => text.push('\t'),
                None => text.push('\n'),
            }
        }
        text
    }
}

fn decode_entities(text: &str) -> String {
    ENTITY_REGEX
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") => {
                    u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
                }
                _ => entity[1..].parse::<u32>().ok().and_then(char::from_u32),
            };
            decoded.map(String::from).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Legacy binary `.doc` support through an external converter program.
pub struct DocExtractor {
    command: String,
    args: Vec<String>,
}

impl DocExtractor {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl TextExtractor for DocExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut scratch = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".doc")
            .tempfile()?;
        scratch.write_all(bytes)?;
        scratch.flush()?;

        debug!("Converting .doc with '{}'", self.command);
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(scratch.path())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ResumeAnalyzerError::Extraction(format!(
                    ".doc conversion is unavailable: converter '{}' is not installed",
                    self.command
                )),
                _ => ResumeAnalyzerError::Extraction(format!(
                    "Failed to run .doc converter '{}': {}",
                    self.command, e
                )),
            })?;

        if !output.status.success() {
            return Err(ResumeAnalyzerError::Extraction(format!(
                ".doc converter '{}' failed ({}): {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            ResumeAnalyzerError::Extraction(format!(".doc converter produced invalid UTF-8: {}", e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            ResumeAnalyzerError::Extraction(format!("Text file is not valid UTF-8: {}", e))
        })
    }
}

/// Routes a document to the extractor for its declared format.
pub struct DocumentTextExtractor {
    doc_extractor: DocExtractor,
}

impl Default for DocumentTextExtractor {
    fn default() -> Self {
        Self::from_config(&InputConfig::default())
    }
}

impl DocumentTextExtractor {
    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            doc_extractor: DocExtractor::new(
                config.doc_converter.clone(),
                config.doc_converter_args.clone(),
            ),
        }
    }

    pub fn extract(&self, bytes: &[u8], file_type: FileType) -> Result<String> {
        match file_type {
            FileType::Pdf => PdfExtractor.extract(bytes),
            FileType::Docx => DocxExtractor.extract(bytes),
            FileType::Doc => self.doc_extractor.extract(bytes),
            FileType::Text => PlainTextExtractor.extract(bytes),
            FileType::Unknown => Err(ResumeAnalyzerError::UnsupportedFormat(
                "supported formats are pdf, docx, doc and txt".to_string(),
            )),
        }
    }
}
