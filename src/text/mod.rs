// Text preparation — whitespace normalization and sentence segmentation.

pub mod normalize;
pub mod segment;

pub use normalize::normalize;
pub use segment::{Segmenter, SentenceModel, Sentences};
