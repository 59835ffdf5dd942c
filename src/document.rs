// Document model — what the front-end hands to the extractor.
//
// A document is a name, a declared format, and the raw bytes. The format is
// decided by the caller before extraction; the core never sniffs MIME types
// or re-opens files by name.

use serde::Serialize;

/// The set of document formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentFormat {
    /// UTF-8 plain text
    PlainText,
    /// Portable Document Format
    Pdf,
    /// OOXML word-processing document (.docx)
    WordProcessing,
}

impl DocumentFormat {
    /// Map an upload MIME type to a format. Unknown types return `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "text/plain" => Some(Self::PlainText),
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::WordProcessing)
            }
            _ => None,
        }
    }

    /// Map a file extension (with or without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::WordProcessing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain-text",
            Self::Pdf => "pdf",
            Self::WordProcessing => "word-processing",
        }
    }
}

/// An uploaded document: name, declared format, and raw content.
///
/// `format` is `None` when the uploader could not map the file to a known
/// format. Such documents extract to empty text rather than failing.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub format: Option<DocumentFormat>,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, format: Option<DocumentFormat>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            format,
            bytes,
        }
    }

    /// Convenience constructor for in-memory plain text.
    pub fn plain_text(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, Some(DocumentFormat::PlainText), text.as_bytes().to_vec())
    }
}

/// Text pulled out of a document, with the source name kept for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedText {
    /// Name of the document this came from (empty for absent documents)
    pub source: String,
    pub text: String,
}

impl ExtractedText {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// The "no content" sentinel for absent or unrecognized documents.
    pub fn empty(source: impl Into<String>) -> Self {
        Self::new(source, String::new())
    }

    /// True when there is nothing worth segmenting or comparing.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
