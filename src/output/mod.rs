// Output formatting — terminal display and search links.

pub mod links;
pub mod terminal;

/// Shorten a sentence for display to at most `max_chars` characters plus "...".
/// Counts characters, so multi-byte text is never cut mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
