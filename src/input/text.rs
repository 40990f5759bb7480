use super::{LoadError, LoadedReport};
use std::path::Path;

/// Load a plain text report.
pub fn load(path: &str) -> Result<LoadedReport, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyReport(path.display().to_string()));
    }

    Ok(LoadedReport {
        text,
        source: format!("text:{}", path.display()),
    })
}
