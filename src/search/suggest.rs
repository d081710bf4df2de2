//! Suggestion Scorer
//!
//! Pure, synchronous ranking of catalog entries against a partial query. Used on every
//! keystroke to fill the type-ahead dropdown.

use super::tokenizer::{char_len, normalize, query_words};
use super::types::Suggestion;
use crate::catalog::service_catalog::ServiceCatalog;

const EXACT_SCORE: f64 = 100.0;
const PREFIX_SCORE: f64 = 80.0;
const SUBSTRING_SCORE: f64 = 60.0;
const WORD_OVERLAP_WEIGHT: f64 = 40.0;
const LENGTH_BONUS_BASE: f64 = 20.0;

/// Scores one normalized candidate against a normalized query and its words.
///
/// Returns 0 for candidates that should be excluded.
pub fn score_candidate(query: &str, words: &[String], candidate: &str) -> f64 {
    let mut score = if candidate == query {
        EXACT_SCORE
    } else if candidate.starts_with(query) {
        PREFIX_SCORE
    } else if candidate.contains(query) {
        SUBSTRING_SCORE
    } else if words.is_empty() {
        0.0
    } else {
        let found = words
            .iter()
            .filter(|word| candidate.contains(word.as_str()))
            .count();
        (found as f64 / words.len() as f64) * WORD_OVERLAP_WEIGHT
    };

    if score > 0.0 {
        score += (LENGTH_BONUS_BASE - char_len(candidate) as f64).max(0.0);
    }

    score
}

/// Scores every catalog entry, best first, keeping at most `limit`.
///
/// Ties go to the shorter candidate, then to the alphabetically smaller one.
pub fn scored_suggestions(query: &str, catalog: &ServiceCatalog, limit: usize) -> Vec<Suggestion> {
    let query = normalize(query);
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }
    let words = query_words(&query);

    let mut scored: Vec<(Suggestion, String)> = catalog
        .entries()
        .iter()
        .filter_map(|service| {
            let candidate = normalize(service);
            let score = score_candidate(&query, &words, &candidate);
            (score > 0.0).then(|| {
                (
                    Suggestion {
                        service: service.clone(),
                        score,
                    },
                    candidate,
                )
            })
        })
        .collect();

    scored.sort_by(|(a, a_key), (b, b_key)| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| char_len(a_key).cmp(&char_len(b_key)))
            .then_with(|| a_key.cmp(b_key))
            .then_with(|| a.service.cmp(&b.service))
    });
    scored.truncate(limit);

    scored.into_iter().map(|(suggestion, _)| suggestion).collect()
}

/// The suggestion dropdown contents for `query`.
pub fn suggest(query: &str, catalog: &ServiceCatalog, limit: usize) -> Vec<String> {
    scored_suggestions(query, catalog, limit)
        .into_iter()
        .map(|suggestion| suggestion.service)
        .collect()
}
