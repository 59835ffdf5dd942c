// Two-document mode: extract both, score them, find matching passages.

use serde::Serialize;
use tracing::info;

use super::Pipeline;
use crate::document::Document;
use crate::error::ExtractError;
use crate::extract::extract;
use crate::similarity::matching::matching_spans_with;
use crate::similarity::MatchSpan;

/// Similarity and matching passages for one pair of documents.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub left: String,
    pub right: String,
    /// Score in [0.0, 1.0]
    pub similarity: f64,
    pub scorer: &'static str,
    /// Matching runs between the raw texts, in document order
    pub spans: Vec<MatchSpan>,
    #[serde(skip)]
    pub left_text: String,
    #[serde(skip)]
    pub right_text: String,
}

impl ComparisonReport {
    /// Similarity as a percentage (0–100).
    pub fn percent(&self) -> f64 {
        self.similarity * 100.0
    }

    /// Total number of characters covered by matching spans.
    pub fn matched_chars(&self) -> usize {
        self.spans.iter().map(|s| s.len).sum()
    }

    /// The matched passages as they appear in the left document.
    pub fn passages(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|s| s.slice_a(&self.left_text))
    }
}

/// Result of a two-document comparison request.
#[derive(Debug, Clone, Serialize)]
pub enum CompareOutcome {
    /// The caller supplied something other than two documents.
    WrongDocumentCount(usize),
    /// At least one document had nothing to compare.
    InsufficientContent { left: String, right: String },
    Compared(ComparisonReport),
}

impl Pipeline {
    /// Compare two documents. Either may be absent, which counts as empty.
    pub fn compare(
        &self,
        left: Option<&Document>,
        right: Option<&Document>,
    ) -> Result<CompareOutcome, ExtractError> {
        let left = extract(left)?;
        let right = extract(right)?;

        if left.is_empty() || right.is_empty() {
            info!(
                left = %left.source,
                right = %right.source,
                "One or both documents have no content to compare"
            );
            return Ok(CompareOutcome::InsufficientContent {
                left: left.source,
                right: right.source,
            });
        }

        let similarity = self.scorer.score(&left.text, &right.text);
        let spans = matching_spans_with(&left.text, &right.text, &self.limits);

        info!(
            left = %left.source,
            right = %right.source,
            similarity,
            scorer = self.scorer.name(),
            spans = spans.len(),
            "Compared documents"
        );

        Ok(CompareOutcome::Compared(ComparisonReport {
            left: left.source,
            right: right.source,
            similarity,
            scorer: self.scorer.name(),
            spans,
            left_text: left.text,
            right_text: right.text,
        }))
    }

    /// Compare an upload batch, which must hold exactly two documents.
    pub fn compare_uploads(&self, documents: &[Document]) -> Result<CompareOutcome, ExtractError> {
        match documents {
            [left, right] => self.compare(Some(left), Some(right)),
            other => Ok(CompareOutcome::WrongDocumentCount(other.len())),
        }
    }
}
