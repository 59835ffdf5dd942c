// Extraction error taxonomy.
//
// Only a recognized-but-unreadable document is an error. Absent documents
// and unrecognized formats are the empty-content sentinel, not failures.

use thiserror::Error;

/// Failure to turn a recognized document format into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("'{name}' is not valid UTF-8 text: {source}")]
    Decode {
        name: String,
        #[source]
        source: std::str::Utf8Error,
    },
    #[error("'{name}' is not a readable PDF: {reason}")]
    UnreadablePdf { name: String, reason: String },
    #[error("'{name}' is not a readable word-processing document: {reason}")]
    UnreadableDocument { name: String, reason: String },
}

impl ExtractError {
    /// Name of the document that failed to extract.
    pub fn document_name(&self) -> &str {
        match self {
            Self::Decode { name, .. }
            | Self::UnreadablePdf { name, .. }
            | Self::UnreadableDocument { name, .. } => name,
        }
    }
}
