// docsim: document similarity and manual plagiarism-check aid
//
// This is the library root. Each module is one stage of the pipeline:
// extraction → normalization/segmentation → scoring/matching → orchestration.
// `output` holds the terminal front-end pieces used by the binary.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;

pub use document::{Document, DocumentFormat, ExtractedText};
pub use error::ExtractError;
pub use extract::extract;
pub use pipeline::Pipeline;
pub use similarity::{matching_spans, similarity, MatchSpan};
pub use text::{normalize, Segmenter, SentenceModel};
