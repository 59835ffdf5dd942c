// Similarity between two texts — a bag-of-words cosine score and the
// matching passages that explain it.

pub mod cosine;
pub mod matching;
pub mod traits;

pub use cosine::{similarity, CosineScorer, Tokenization};
pub use matching::{matching_spans, MatchLimits, MatchSpan};
pub use traits::SimilarityScorer;
