//! Word-oriented text helpers for excerpts.

/// Truncates `text` after `max_words` whitespace-separated words.
///
/// Collapses the whitespace between kept words and appends an ellipsis when
/// anything was cut. Used for feed item descriptions and list excerpts.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();

    if words.len() <= max_words {
        return words.join(" ");
    }

    let mut truncated = words[..max_words].join(" ");
    truncated.push_str(" …");
    truncated
}
