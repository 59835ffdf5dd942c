// Bag-of-words cosine similarity.
//
// Both texts are normalized, tokenized, and turned into raw term-frequency
// vectors over their shared vocabulary. The score is
//
//   dot(v1, v2) / sqrt(|v1|² · |v2|²)
//
// Counts stay integers until the final division, so a text compared with
// itself (or with any reordering of its tokens) scores exactly 1.0. Word
// order is deliberately ignored.
//
// If either vector is all zeros (nothing to tokenize) the score is 0.0.

use std::collections::HashMap;

use serde::Serialize;

use super::traits::SimilarityScorer;
use crate::text::normalize;

/// How normalized text is split into vocabulary tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tokenization {
    /// Whitespace-delimited tokens, punctuation kept attached.
    Whitespace { lowercase: bool },
    /// Lowercased runs of two or more word characters (letters, digits,
    /// underscore). Single-character words and punctuation are dropped.
    Words,
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::Whitespace { lowercase: false }
    }
}

impl Tokenization {
    /// Tokenize already-normalized text into owned tokens.
    pub fn tokens(&self, normalized: &str) -> Vec<String> {
        match self {
            Self::Whitespace { lowercase: false } => {
                normalized.split(' ').filter(|t| !t.is_empty()).map(str::to_string).collect()
            }
            Self::Whitespace { lowercase: true } => normalized
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
                .collect(),
            Self::Words => normalized
                .split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .filter(|w| w.chars().nth(1).is_some())
                .map(str::to_lowercase)
                .collect(),
        }
    }
}

/// Count how often each token appears in `text` (normalized first).
pub fn term_frequencies(text: &str, tokenization: Tokenization) -> HashMap<String, u64> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokenization.tokens(&normalize(text)) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity between two term-frequency maps.
///
/// Tokens missing from one side count as zero there, which is the same as
/// projecting both onto the union vocabulary.
pub fn cosine_from_counts(counts_a: &HashMap<String, u64>, counts_b: &HashMap<String, u64>) -> f64 {
    let dot: u64 = counts_a
        .iter()
        .filter_map(|(token, a)| counts_b.get(token).map(|b| a * b))
        .sum();
    let norm_a: u64 = counts_a.values().map(|c| c * c).sum();
    let norm_b: u64 = counts_b.values().map(|c| c * c).sum();

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    let score = dot as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    score.clamp(0.0, 1.0)
}

/// Cosine scorer over raw term frequencies.
#[derive(Debug, Clone, Default)]
pub struct CosineScorer {
    pub tokenization: Tokenization,
}

impl CosineScorer {
    pub fn new(tokenization: Tokenization) -> Self {
        Self { tokenization }
    }
}

impl SimilarityScorer for CosineScorer {
    fn score(&self, text_a: &str, text_b: &str) -> f64 {
        let counts_a = term_frequencies(text_a, self.tokenization);
        let counts_b = term_frequencies(text_b, self.tokenization);
        cosine_from_counts(&counts_a, &counts_b)
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Cosine similarity with the default (case-sensitive whitespace) tokens.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    CosineScorer::default().score(text_a, text_b)
}
