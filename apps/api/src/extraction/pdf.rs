use std::path::Path;

use lopdf::Document;
use tracing::{debug, warn};

use super::ExtractionError;

/// Reads every page in page-number order. Each page contributes its text
/// followed by one newline; a page whose text cannot be decoded contributes
/// an empty segment.
pub(crate) fn read_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let doc = Document::load(path).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(ExtractionError::Encrypted);
    }

    // pdf-extract keeps line breaks within a page; lopdf runs lines together
    let pages = match pdf_extract::extract_text_by_pages(path) {
        Ok(pages) => pages,
        Err(e) => {
            warn!("pdf-extract failed on {}, using lopdf: {e}", path.display());
            lopdf_pages(&doc, path)
        }
    };

    let mut text = String::new();
    for page in &pages {
        text.push_str(page.trim_matches('\n'));
        text.push('\n');
    }
    Ok(text)
}

fn lopdf_pages(doc: &Document, path: &Path) -> Vec<String> {
    doc.get_pages()
        .keys()
        .map(|page_num| {
            doc.extract_text(&[*page_num]).unwrap_or_else(|e| {
                debug!("No text on page {page_num} of {}: {e}", path.display());
                String::new()
            })
        })
        .collect()
}
