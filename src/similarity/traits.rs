// Similarity scorer trait — swap-ready abstraction.
//
// The pipeline only needs "two texts in, one score out". The default is the
// bag-of-words cosine scorer; anything else (shingles, embeddings) can slot in
// behind this trait without touching the orchestrator.

/// Trait for scoring how similar two texts are.
pub trait SimilarityScorer {
    /// Score two texts. Returns a value in [0.0, 1.0]; must be symmetric.
    fn score(&self, text_a: &str, text_b: &str) -> f64;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}
