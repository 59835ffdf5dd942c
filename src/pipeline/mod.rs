// Pipeline orchestration — extraction → segmentation or scoring.
//
// Two modes, mirroring what a user can ask for:
//   - check: one document (or pasted text) → its sentences, ready for the
//     front-end to turn into search links
//   - compare: two documents → cosine similarity plus matching passages
//
// Empty content is an outcome, not an error. Extraction errors propagate
// untouched and no partial result is returned.

pub mod check;
pub mod compare;

use std::sync::Arc;

use crate::similarity::{CosineScorer, MatchLimits, SimilarityScorer, Tokenization};
use crate::text::{Segmenter, SentenceModel};

pub use check::CheckOutcome;
pub use compare::{CompareOutcome, ComparisonReport};

/// Everything a request needs: segmenter, scorer, and matcher bounds.
///
/// Holds no mutable state, so one pipeline can serve any number of requests.
pub struct Pipeline {
    segmenter: Segmenter,
    scorer: Box<dyn SimilarityScorer>,
    limits: MatchLimits,
}

impl Pipeline {
    pub fn new(
        segmenter: Segmenter,
        scorer: Box<dyn SimilarityScorer>,
        limits: MatchLimits,
    ) -> Self {
        Self {
            segmenter,
            scorer,
            limits,
        }
    }

    /// Pipeline with the English sentence model, cosine scoring over the
    /// given tokenization, and the given matcher bounds.
    pub fn with_settings(
        model: Arc<SentenceModel>,
        tokenization: Tokenization,
        limits: MatchLimits,
    ) -> Self {
        Self::new(
            Segmenter::new(model),
            Box::new(CosineScorer::new(tokenization)),
            limits,
        )
    }

    pub fn scorer(&self) -> &dyn SimilarityScorer {
        self.scorer.as_ref()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::with_settings(
            Arc::new(SentenceModel::english()),
            Tokenization::default(),
            MatchLimits::default(),
        )
    }
}
