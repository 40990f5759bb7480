use super::{LoadError, LoadedReport};
use std::path::Path;

/// Load report text from an EPUB file, chapters joined by blank lines.
pub fn load(path: &str) -> Result<LoadedReport, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = epub::doc::EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    let mut text = String::new();
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            let plain = strip_markup(&chapter_content);
            if plain.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push_str("\n\n");
            }
            text.push_str(&plain);
        }
    }

    if text.is_empty() {
        return Err(LoadError::EmptyReport(path.display().to_string()));
    }

    Ok(LoadedReport {
        text,
        source: format!("epub:{}", path.display()),
    })
}

/// Drops tags and blank lines from chapter XHTML.
fn strip_markup(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
