// Unit tests for normalization and sentence segmentation.
//
// Tests isolated pure functions: normalize idempotence and spacing
// invariants over a spread of inputs, and Segmenter behavior on empty,
// normalized, and hard-wrapped text.

use std::sync::Arc;

use docsim::text::{normalize, Segmenter, SentenceModel};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "plain",
    "  leading and trailing  ",
    "tabs\tand\nnewlines\r\nmixed",
    "many     spaces    here",
    "unicode\u{00A0}nbsp\u{2009}thin\u{3000}ideographic",
    "\n\n\nparagraph one\n\n\nparagraph two\n\n",
    "émoji 😀  and   accents",
];

// ============================================================
// normalize — invariants
// ============================================================

#[test]
fn normalize_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn normalize_has_no_consecutive_whitespace() {
    for sample in SAMPLES {
        let out = normalize(sample);
        let chars: Vec<char> = out.chars().collect();
        assert!(
            !chars.windows(2).any(|w| w[0].is_whitespace() && w[1].is_whitespace()),
            "consecutive whitespace in {out:?}"
        );
    }
}

#[test]
fn normalize_trims_and_uses_ascii_space() {
    for sample in SAMPLES {
        let out = normalize(sample);
        assert_eq!(out.trim(), out);
        assert!(
            out.chars().all(|c| !c.is_whitespace() || c == ' '),
            "non-space whitespace survived in {out:?}"
        );
    }
}

#[test]
fn normalize_keeps_word_sequence() {
    assert_eq!(
        normalize("\n\n\nparagraph one\n\n\nparagraph two\n\n"),
        "paragraph one paragraph two"
    );
}

// ============================================================
// Segmenter
// ============================================================

#[test]
fn segment_empty_is_empty() {
    let seg = Segmenter::default();
    assert_eq!(seg.segment("").count(), 0);
}

#[test]
fn segment_two_simple_sentences() {
    let seg = Segmenter::default();
    let sentences: Vec<&str> = seg.segment("Hello world. This is a test.").collect();
    assert_eq!(sentences, vec!["Hello world.", "This is a test."]);
}

#[test]
fn segment_same_result_before_and_after_normalization() {
    let seg = Segmenter::default();
    let raw = "The first\nsentence wraps here.   The second\tone\ndoes too.";
    let from_raw: Vec<String> = seg.segment(raw).map(normalize).collect();
    let normalized = normalize(raw);
    let from_normalized: Vec<String> = seg.segment(&normalized).map(str::to_string).collect();
    assert_eq!(from_raw, from_normalized);
    assert_eq!(from_normalized.len(), 2);
}

#[test]
fn segment_keeps_document_order() {
    let seg = Segmenter::default();
    let text = "Alpha comes first. Beta is second. Gamma is last.";
    let sentences: Vec<&str> = seg.segment(text).collect();
    let positions: Vec<usize> = sentences
        .iter()
        .map(|s| text.find(s).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn segment_handles_common_abbreviations() {
    let seg = Segmenter::default();
    let text = "Compare apples vs. oranges. Mrs. Jones agreed, e.g. about fruit. Done.";
    let sentences: Vec<&str> = seg.segment(text).collect();
    assert_eq!(
        sentences,
        vec![
            "Compare apples vs. oranges.",
            "Mrs. Jones agreed, e.g. about fruit.",
            "Done."
        ]
    );
}

#[test]
fn segment_decimals_do_not_split() {
    let seg = Segmenter::default();
    assert_eq!(seg.segment("Pi is about 3.14 today. Yes.").count(), 2);
}

#[test]
fn segmenters_share_one_model() {
    let model = Arc::new(SentenceModel::english());
    let a = Segmenter::new(Arc::clone(&model));
    let b = Segmenter::new(Arc::clone(&model));
    assert_eq!(Arc::strong_count(&model), 3);
    assert_eq!(
        a.segment("Dr. No. Yes.").count(),
        b.segment("Dr. No. Yes.").count()
    );
}
