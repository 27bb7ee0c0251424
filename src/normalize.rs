//! Text normalization and word tokenization.
//!
//! All matching operates on word sequences produced here. Words are opaque
//! strings compared by exact equality; no punctuation stripping is applied.

/// Collapse whitespace and strip leading/trailing whitespace.
///
/// Non-breaking spaces are treated as ordinary spaces. Any run of whitespace
/// becomes a single space. Empty or all-whitespace input normalizes to the
/// empty string.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = true; // Leading whitespace is dropped
    for ch in text.chars() {
        if ch.is_whitespace() || ch == '\u{00a0}' {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split text into a word sequence, normalizing first.
///
/// With `lower` set, the normalized text is lowercased before splitting.
/// Empty normalized text yields an empty sequence.
pub fn text_to_words(text: &str, lower: bool) -> Vec<String> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Vec::new();
    }
    let text = if lower { text.to_lowercase() } else { text };
    text.split(' ').map(str::to_owned).collect()
}
