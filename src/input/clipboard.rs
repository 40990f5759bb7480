use super::{LoadError, LoadedReport};

/// Load the report from the system clipboard.
pub fn load() -> Result<LoadedReport, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(LoadError::EmptyReport("clipboard".to_string()));
    }

    Ok(LoadedReport {
        text,
        source: "clipboard".to_string(),
    })
}
