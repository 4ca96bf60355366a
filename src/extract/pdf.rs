use crate::extract::ExtractError;

/// Extracts lowercase text from an in-memory PDF
///
/// Per-page text is joined with single spaces; pages without text (scanned
/// images, blank pages) are skipped.
pub fn pdf_to_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let text = pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(text.to_lowercase())
}
