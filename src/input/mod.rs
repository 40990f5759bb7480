use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report is empty: {0}")]
    EmptyReport(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Raw report text and where it came from.
///
/// Tokenization is deferred until the wizard reaches the entities step,
/// since the text may still be edited.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReport {
    pub text: String,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Loads a report file, picking the loader by extension.
pub fn load_report(path: &str) -> Result<LoadedReport, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let result = match extension.as_deref() {
        Some("pdf") => pdf::load(path),
        Some("epub") => epub::load(path),
        Some("docx") | Some("odt") | Some("doc") => {
            Err(LoadError::UnsupportedFormat(path.to_string()))
        }
        _ => text::load(path),
    };

    match &result {
        Ok(report) => tracing::debug!(source = %report.source, bytes = report.text.len(), "report loaded"),
        Err(err) => tracing::warn!(path, error = %err, "report load failed"),
    }
    result
}
