// Sentence segmentation.
//
// Boundaries come from Unicode sentence segmentation (UAX #29), which
// already handles decimals and lowercase continuations like "e.g. this".
// On top of that, a SentenceModel suppresses boundaries that follow a known
// abbreviation ("Dr.", "vs.") or a single-letter initial ("J."), and the
// bare line-break boundaries UAX #29 reports for hard-wrapped text.
//
// The model is built once by the caller and shared by handle; segmenting
// never touches global state.

use std::collections::HashSet;
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that end in a period but rarely end a sentence.
/// Stored lowercase, without the trailing period.
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "gen", "col", "capt", "lt",
    "sgt", "hon", "vs", "etc", "e.g", "i.e", "cf", "viz", "al", "fig", "figs", "eq", "approx", "dept",
    "vol", "pp", "ed", "eds", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

/// Abbreviation knowledge used to refine sentence boundaries.
#[derive(Debug, Clone, Default)]
pub struct SentenceModel {
    abbreviations: HashSet<String>,
}

impl SentenceModel {
    /// Model with no abbreviations: plain Unicode sentence boundaries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Model seeded with common English abbreviations.
    pub fn english() -> Self {
        Self::empty().with_abbreviations(ENGLISH_ABBREVIATIONS.iter().copied())
    }

    /// Add abbreviations. Case and a trailing period are ignored, so
    /// "Approx." and "approx" are the same entry.
    pub fn with_abbreviations<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbr in extra {
            let key = abbr.as_ref().trim().trim_end_matches('.').to_lowercase();
            if !key.is_empty() {
                self.abbreviations.insert(key);
            }
        }
        self
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations
            .contains(&word.trim_end_matches('.').to_lowercase())
    }

    /// Should the sentence that ends with `chunk` continue into the next one?
    fn joins_across(&self, chunk: &str) -> bool {
        let tail = chunk
            .trim_end()
            .trim_end_matches(['"', '\'', ')', ']', '\u{201D}', '\u{2019}']);
        if !tail.ends_with(['.', '!', '?', '\u{2026}']) {
            return true;
        }

        let Some(last) = chunk.split_whitespace().next_back() else {
            return false;
        };
        let Some(word) = last.strip_suffix('.') else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());

        let mut chars = word.chars();
        let is_initial = matches!(
            (chars.next(), chars.next()),
            (Some(c), None) if c.is_uppercase() && c != 'I'
        );

        is_initial || self.is_abbreviation(word)
    }
}

/// Splits text into sentences using a shared [`SentenceModel`].
#[derive(Debug, Clone)]
pub struct Segmenter {
    model: Arc<SentenceModel>,
}

impl Segmenter {
    pub fn new(model: Arc<SentenceModel>) -> Self {
        Self { model }
    }

    /// Lazily segment `text` into trimmed, non-empty sentences in document
    /// order. Call again (or clone the iterator) to restart.
    pub fn segment<'a>(&'a self, text: &'a str) -> Sentences<'a> {
        Sentences {
            text,
            pos: 0,
            model: &self.model,
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Arc::new(SentenceModel::english()))
    }
}

/// Iterator over the sentences of one text.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
    model: &'a SentenceModel,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let rest = &self.text[self.pos..];
            if rest.is_empty() {
                return None;
            }

            let mut end = 0;
            for piece in rest.split_sentence_bounds() {
                end += piece.len();
                if !self.model.joins_across(&rest[..end]) {
                    break;
                }
            }

            self.pos += end;
            let sentence = rest[..end].trim();
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
    }
}
