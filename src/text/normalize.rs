// Whitespace normalization.
//
// Every run of whitespace (spaces, tabs, newlines, and the other Unicode
// White_Space characters) becomes one ASCII space, and the ends are trimmed.

/// Collapse whitespace runs to a single space and trim both ends.
///
/// Total and idempotent: `normalize(&normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
