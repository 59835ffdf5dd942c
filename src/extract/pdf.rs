// PDF extraction via pdf-extract.
//
// Pages are read from the in-memory buffer in page order and concatenated
// with no separator. A page without a text layer contributes nothing.

use tracing::debug;

use crate::error::ExtractError;

/// Extract the text layer of every page and join them.
pub fn read_pdf(name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|e| {
        ExtractError::UnreadablePdf {
            name: name.to_string(),
            reason: e.to_string(),
        }
    })?;

    let empty_pages = pages.iter().filter(|p| p.trim().is_empty()).count();
    debug!(
        document = name,
        pages = pages.len(),
        empty_pages,
        "Extracted PDF pages"
    );

    Ok(pages.concat())
}
