use super::{LoadError, LoadedReport};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load report text from a PDF file using pdf-extract.
pub fn load(path: &str) -> Result<LoadedReport, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    let text =
        pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyReport(path.display().to_string()));
    }

    Ok(LoadedReport {
        text,
        source: format!("pdf:{}", path.display()),
    })
}
