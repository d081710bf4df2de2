use crate::catalog::types::Provider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const NO_MATCHES_MESSAGE: &str = "No matching services found";

/// A catalog entry scored against a partial query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub service: String,
    pub score: f64,
}

/// A provider that matched a search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(flatten)]
    pub provider: Provider,
    /// The provider's services (display-cased) that equal the term.
    pub matching_services: Vec<String>,
    /// Higher is more relevant.
    pub relevance_score: u32,
}

/// Where a published result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Remote,
    LocalCache,
}

/// Failures of the remote lookup. All of them are recovered by the local fallback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SearchError {
    /// The store holds no documents at all, which points at a connectivity or
    /// configuration fault rather than a legitimate empty answer.
    #[error("provider collection is empty")]
    CollectionEmpty,
    #[error("remote lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("remote lookup failed: {0}")]
    TransientFetch(String),
}

/// The settled answer for one search term.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The term was blank; no lookup ran.
    Empty,
    /// At least one match from the remote store or the local cache.
    Resolved {
        term: String,
        results: Vec<SearchResult>,
        source: ResultSource,
    },
    /// Both tiers answered and neither had a match.
    NoMatches { term: String },
    /// The remote lookup failed; `results` come from the local snapshot only.
    FallenBack {
        term: String,
        results: Vec<SearchResult>,
        cause: SearchError,
    },
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Resolved { results, .. } | SearchOutcome::FallenBack { results, .. } => {
                results
            }
            SearchOutcome::Empty | SearchOutcome::NoMatches { .. } => &[],
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Resolved { results, .. } | SearchOutcome::FallenBack { results, .. } => {
                results
            }
            SearchOutcome::Empty | SearchOutcome::NoMatches { .. } => Vec::new(),
        }
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            SearchOutcome::Empty => None,
            SearchOutcome::Resolved { term, .. }
            | SearchOutcome::NoMatches { term }
            | SearchOutcome::FallenBack { term, .. } => Some(term),
        }
    }

    pub fn source(&self) -> Option<ResultSource> {
        match self {
            SearchOutcome::Resolved { source, .. } => Some(*source),
            SearchOutcome::FallenBack { .. } => Some(ResultSource::LocalCache),
            SearchOutcome::Empty | SearchOutcome::NoMatches { .. } => None,
        }
    }

    /// The user-visible message for this outcome, if any.
    ///
    /// Degraded-mode wording always names the result count and never reuses the
    /// no-matches wording.
    pub fn message(&self) -> Option<String> {
        match self {
            SearchOutcome::Empty | SearchOutcome::Resolved { .. } => None,
            SearchOutcome::NoMatches { .. } => Some(NO_MATCHES_MESSAGE.to_string()),
            SearchOutcome::FallenBack { results, .. } => Some(degraded_message(results.len())),
        }
    }
}

pub fn degraded_message(count: usize) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!(
        "Search service unavailable, showing {} offline {}",
        count, noun
    )
}

// --- HTTP DTOs ---

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub source: Option<ResultSource>,
    pub message: Option<String>,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionItem {
    pub service: String,
    pub score: f64,
    pub segments: Vec<crate::search::highlight::HighlightSegment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<SuggestionItem>,
}
