// Matching passages between two raw texts.
//
// Recursive longest-common-substring alignment: find the longest run of
// characters the two texts share, keep it, then repeat independently on the
// pieces to its left and to its right. The result is an order-preserving,
// non-overlapping set of spans, the same alignment a line-free diff produces.
//
// Offsets and lengths are in characters, not bytes.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

/// A run of `len` identical characters at `a` in the first text and `b` in
/// the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MatchSpan {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

impl MatchSpan {
    /// The matched passage, sliced out of the first text.
    pub fn slice_a<'t>(&self, text_a: &'t str) -> &'t str {
        char_slice(text_a, self.a, self.len)
    }

    /// The matched passage, sliced out of the second text.
    pub fn slice_b<'t>(&self, text_b: &'t str) -> &'t str {
        char_slice(text_b, self.b, self.len)
    }
}

/// Bounds on the matcher's input. The search is quadratic in the worst case,
/// so very long documents can be truncated before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchLimits {
    /// Only the first `max_chars` characters of each text are matched.
    pub max_chars: Option<usize>,
}

/// Find the matching spans between two texts with no input bound.
pub fn matching_spans(text_a: &str, text_b: &str) -> Vec<MatchSpan> {
    matching_spans_with(text_a, text_b, &MatchLimits::default())
}

/// Find the matching spans between two texts, honoring `limits`.
///
/// Spans come back sorted by position, every span has `len >= 1`, and spans
/// that continue each other in both texts are merged.
pub fn matching_spans_with(text_a: &str, text_b: &str, limits: &MatchLimits) -> Vec<MatchSpan> {
    let take = limits.max_chars.unwrap_or(usize::MAX);
    let a: Vec<char> = text_a.chars().take(take).collect();
    let b: Vec<char> = text_b.chars().take(take).collect();

    // Positions of every character in `b`, ascending
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut found: Vec<MatchSpan> = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let span = longest_match(&a, &b2j, alo, ahi, blo, bhi);
        if span.len == 0 {
            continue;
        }
        if alo < span.a && blo < span.b {
            pending.push((alo, span.a, blo, span.b));
        }
        let (a_end, b_end) = (span.a + span.len, span.b + span.len);
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
        found.push(span);
    }
    found.sort_unstable();

    let merged = merge_adjacent(found);
    debug!(
        chars_a = a.len(),
        chars_b = b.len(),
        spans = merged.len(),
        "Computed matching spans"
    );
    merged
}

/// Longest common run within `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the run that starts earliest in `a`, then earliest in `b`.
/// Returns a zero-length span when the ranges share nothing.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchSpan {
    let mut best = MatchSpan {
        a: alo,
        b: blo,
        len: 0,
    };

    // prev[j - blo] = length of the common run ending at a[i-1], b[j].
    // Only the entries listed in `*_touched` are ever nonzero.
    let width = bhi.saturating_sub(blo);
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];
    let mut prev_touched: Vec<usize> = Vec::new();
    let mut cur_touched: Vec<usize> = Vec::new();

    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        if let Some(positions) = b2j.get(c) {
            let first = positions.partition_point(|&j| j < blo);
            for &j in positions[first..].iter().take_while(|&&j| j < bhi) {
                let col = j - blo;
                let k = if col > 0 { prev[col - 1] + 1 } else { 1 };
                cur[col] = k;
                cur_touched.push(col);
                if k > best.len {
                    best = MatchSpan {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        len: k,
                    };
                }
            }
        }
        for &col in &prev_touched {
            prev[col] = 0;
        }
        prev_touched.clear();
        std::mem::swap(&mut prev, &mut cur);
        std::mem::swap(&mut prev_touched, &mut cur_touched);
    }

    best
}

fn merge_adjacent(spans: Vec<MatchSpan>) -> Vec<MatchSpan> {
    let mut merged: Vec<MatchSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(prev) if prev.a + prev.len == span.a && prev.b + prev.len == span.b => {
                prev.len += span.len;
            }
            _ => merged.push(span),
        }
    }
    merged
}

fn char_slice(text: &str, start: usize, len: usize) -> &str {
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    let begin = byte_at(start);
    let end = byte_at(start + len);
    &text[begin..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_and_suffix_match() {
        let a = "abcXYZdef";
        let b = "abcQQQdef";
        let spans = matching_spans(a, b);
        assert_eq!(
            spans,
            vec![
                MatchSpan { a: 0, b: 0, len: 3 },
                MatchSpan { a: 6, b: 6, len: 3 },
            ]
        );
        let texts: Vec<&str> = spans.iter().map(|s| s.slice_a(a)).collect();
        assert_eq!(texts, vec!["abc", "def"]);
    }

    #[test]
    fn test_no_common_characters() {
        assert!(matching_spans("abc", "xyz").is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(matching_spans("", "abc").is_empty());
        assert!(matching_spans("abc", "").is_empty());
    }

    #[test]
    fn test_identical_texts_are_one_span() {
        let spans = matching_spans("same text", "same text");
        assert_eq!(spans, vec![MatchSpan { a: 0, b: 0, len: 9 }]);
    }

    #[test]
    fn test_shifted_match_offsets() {
        let spans = matching_spans("xxhello", "hello");
        assert_eq!(spans, vec![MatchSpan { a: 2, b: 0, len: 5 }]);
    }

    #[test]
    fn test_tie_prefers_earliest_in_first_text() {
        // "ab" and "cd" are both length 2; "ab" comes first in `a`, and
        // once it is taken "cd" sits on opposite sides and cannot align.
        let spans = matching_spans("ab cd", "cd ab");
        assert_eq!(spans[0], MatchSpan { a: 0, b: 3, len: 2 });
    }

    #[test]
    fn test_multibyte_offsets_are_chars() {
        let a = "héllo wörld";
        let b = "wörld";
        let spans = matching_spans(a, b);
        assert_eq!(spans, vec![MatchSpan { a: 6, b: 0, len: 5 }]);
        assert_eq!(spans[0].slice_a(a), "wörld");
        assert_eq!(spans[0].slice_b(b), "wörld");
    }

    /// Deterministic word salad drawn from a small vocabulary.
    fn prose(seed: u64, chars: usize) -> String {
        const WORDS: &[&str] = &[
            "the", "of", "and", "document", "similar", "passage", "text", "was", "written",
            "by", "a", "student", "who", "copied", "source", "into", "report", "with",
            "minor", "changes", "to", "wording", "order", "sentence", "is",
        ];
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut out = String::with_capacity(chars + 16);
        while out.len() < chars {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            out.push_str(WORDS[(state >> 33) as usize % WORDS.len()]);
            out.push(if (state >> 20) % 11 == 0 { '.' } else { ' ' });
        }
        out
    }

    fn brute_longest(a: &[char], b: &[char]) -> MatchSpan {
        let mut best = MatchSpan { a: 0, b: 0, len: 0 };
        for i in 0..a.len() {
            for j in 0..b.len() {
                let k = a[i..].iter().zip(&b[j..]).take_while(|(x, y)| x == y).count();
                if k > best.len {
                    best = MatchSpan { a: i, b: j, len: k };
                }
            }
        }
        best
    }

    #[test]
    fn test_longest_match_agrees_with_exhaustive_search() {
        for seed in 0..40 {
            let a: Vec<char> = prose(seed, 60).chars().collect();
            let b: Vec<char> = prose(seed + 100, 50).chars().collect();
            let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
            for (j, &c) in b.iter().enumerate() {
                b2j.entry(c).or_default().push(j);
            }
            let fast = longest_match(&a, &b2j, 0, a.len(), 0, b.len());
            assert_eq!(fast, brute_longest(&a, &b), "seed {seed}");
        }
    }

    #[test]
    fn test_longest_match_respects_sub_ranges() {
        let a: Vec<char> = "xxabcdxx".chars().collect();
        let b: Vec<char> = "abcd--abcd".chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        // Only the second "abcd" in `b` is in range, and only "bcd" of it
        let span = longest_match(&a, &b2j, 3, 8, 7, 10);
        assert_eq!(span, MatchSpan { a: 3, b: 7, len: 3 });
    }

    #[test]
    fn test_document_length_inputs_finish_quickly() {
        let a = prose(1, 30_000);
        let b = prose(2, 30_000);
        let started = std::time::Instant::now();
        let spans = matching_spans(&a, &b);
        let elapsed = started.elapsed();

        assert!(
            elapsed < std::time::Duration::from_secs(20),
            "30 KB pair took {elapsed:?}"
        );
        assert!(!spans.is_empty());
        let (ca, cb): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
        for pair in spans.windows(2) {
            assert!(pair[0].a + pair[0].len <= pair[1].a);
            assert!(pair[0].b + pair[0].len <= pair[1].b);
        }
        for span in &spans {
            assert_eq!(ca[span.a..span.a + span.len], cb[span.b..span.b + span.len]);
        }
    }

    #[test]
    fn test_limit_truncates_input() {
        let limits = MatchLimits { max_chars: Some(3) };
        let spans = matching_spans_with("abcdef", "abcdef", &limits);
        assert_eq!(spans, vec![MatchSpan { a: 0, b: 0, len: 3 }]);
    }
}
