// Text extraction — turns an uploaded document into raw text.
//
// Dispatch is on the declared format only. Everything works on the byte
// buffer the caller supplied; nothing is re-read from disk.

pub mod docx;
pub mod pdf;
pub mod plain;

use tracing::{debug, info};

use crate::document::{Document, DocumentFormat, ExtractedText};
use crate::error::ExtractError;

/// Extract text from a document.
///
/// An absent document or an unrecognized format yields empty text. A
/// recognized format whose bytes cannot be read is an error and is never
/// downgraded to empty text.
pub fn extract(document: Option<&Document>) -> Result<ExtractedText, ExtractError> {
    let Some(doc) = document else {
        debug!("No document supplied, returning empty text");
        return Ok(ExtractedText::empty(""));
    };

    let Some(format) = doc.format else {
        info!(document = %doc.name, "Unrecognized document format, treating as empty");
        return Ok(ExtractedText::empty(&doc.name));
    };

    let text = match format {
        DocumentFormat::PlainText => plain::read_text(&doc.name, &doc.bytes)?,
        DocumentFormat::Pdf => pdf::read_pdf(&doc.name, &doc.bytes)?,
        DocumentFormat::WordProcessing => docx::read_word_document(&doc.name, &doc.bytes)?,
    };

    info!(
        document = %doc.name,
        format = format.as_str(),
        bytes = doc.bytes.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(ExtractedText::new(&doc.name, text))
}
