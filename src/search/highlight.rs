use regex::Regex;
use serde::{Deserialize, Serialize};

/// A run of suggestion text, flagged when it matches the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

impl HighlightSegment {
    fn new(text: &str, matched: bool) -> Self {
        Self {
            text: text.to_string(),
            matched,
        }
    }
}

/// Splits `text` around every case-insensitive occurrence of `query`.
///
/// Concatenating the segment texts always reproduces `text`.
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }

    let needle = query.trim();
    if needle.is_empty() {
        return vec![HighlightSegment::new(text, false)];
    }

    let re = match Regex::new(&format!("(?i){}", regex::escape(needle))) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("Failed to build highlight pattern for {:?}: {}", needle, e);
            return vec![HighlightSegment::new(text, false)];
        }
    };

    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in re.find_iter(text) {
        if found.start() > cursor {
            segments.push(HighlightSegment::new(&text[cursor..found.start()], false));
        }
        segments.push(HighlightSegment::new(found.as_str(), true));
        cursor = found.end();
    }
    if cursor < text.len() {
        segments.push(HighlightSegment::new(&text[cursor..], false));
    }

    segments
}
