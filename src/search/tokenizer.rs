/// Lower-cases and trims a query or service name for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Splits an already normalized query on single spaces, discarding empty tokens.
///
/// Runs of spaces therefore never produce empty words, but other whitespace stays
/// inside the word it touches.
pub fn query_words(normalized: &str) -> Vec<String> {
    normalized
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of characters, the unit used by the suggestion length bonus.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
