// Single-document mode: extract, then split into sentences.

use serde::Serialize;
use tracing::info;

use super::Pipeline;
use crate::document::Document;
use crate::error::ExtractError;
use crate::extract::extract;

/// Result of checking one document or one pasted text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CheckOutcome {
    /// Nothing to segment: absent document, unknown format, or blank text.
    NoContent { source: String },
    /// Sentences in document order, verbatim.
    Sentences {
        source: String,
        sentences: Vec<String>,
    },
}

impl Pipeline {
    /// Extract a document and segment its text.
    pub fn check(&self, document: Option<&Document>) -> Result<CheckOutcome, ExtractError> {
        let extracted = extract(document)?;
        Ok(self.segment_source(&extracted.source, &extracted.text))
    }

    /// Segment text the user typed or pasted directly.
    pub fn check_text(&self, text: &str) -> CheckOutcome {
        self.segment_source("text input", text)
    }

    fn segment_source(&self, source: &str, text: &str) -> CheckOutcome {
        if text.trim().is_empty() {
            info!(source, "No content to check");
            return CheckOutcome::NoContent {
                source: source.to_string(),
            };
        }

        let sentences: Vec<String> = self
            .segmenter
            .segment(text)
            .map(str::to_string)
            .collect();
        info!(source, sentences = sentences.len(), "Segmented text");

        CheckOutcome::Sentences {
            source: source.to_string(),
            sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;

    #[test]
    fn test_absent_document_is_no_content() {
        let outcome = Pipeline::default().check(None).unwrap();
        assert!(matches!(outcome, CheckOutcome::NoContent { .. }));
    }

    #[test]
    fn test_unknown_format_is_no_content() {
        let doc = Document::new("pic.png", None, vec![1, 2, 3]);
        let outcome = Pipeline::default().check(Some(&doc)).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::NoContent {
                source: "pic.png".to_string()
            }
        );
    }

    #[test]
    fn test_plain_text_is_segmented() {
        let doc = Document::plain_text("a.txt", "First one. Second one.");
        let outcome = Pipeline::default().check(Some(&doc)).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::Sentences {
                source: "a.txt".to_string(),
                sentences: vec!["First one.".to_string(), "Second one.".to_string()],
            }
        );
    }

    #[test]
    fn test_extraction_error_propagates() {
        let doc = Document::new("bad.txt", Some(DocumentFormat::PlainText), vec![0xFF]);
        let err = Pipeline::default().check(Some(&doc)).unwrap_err();
        assert!(matches!(err, ExtractError::Decode { .. }));
    }

    #[test]
    fn test_blank_pasted_text() {
        assert!(matches!(
            Pipeline::default().check_text("  \n"),
            CheckOutcome::NoContent { .. }
        ));
    }
}
