use super::highlight::highlight;
use super::pipeline::SearchPipeline;
use super::suggest::scored_suggestions;
use super::types::{SearchResponse, SuggestResponse, SuggestionItem};
use crate::config::SearchConfig;
use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

pub const ENDPOINT_SEARCH: &str = "/search";
pub const ENDPOINT_SUGGEST: &str = "/suggest";

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
}

/// One-shot two-tier search. No debouncing happens server side.
pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(pipeline): Extension<Arc<SearchPipeline>>,
) -> Json<SearchResponse> {
    let outcome = pipeline.run(&params.q).await;
    let source = outcome.source();
    let message = outcome.message();
    let results = outcome.into_results();

    let total_count = results.len();
    let limit = params.limit.unwrap_or(total_count);
    let results: Vec<_> = results.into_iter().take(limit).collect();

    tracing::info!(
        "Search {:?}: {} results ({:?})",
        params.q,
        total_count,
        source
    );

    Json(SearchResponse {
        query: params.q,
        source,
        message,
        total_count,
        count: results.len(),
        results,
    })
}

pub async fn handle_suggest(
    Query(params): Query<SearchParams>,
    Extension(pipeline): Extension<Arc<SearchPipeline>>,
    Extension(config): Extension<Arc<SearchConfig>>,
) -> Json<SuggestResponse> {
    let limit = params
        .limit
        .unwrap_or(config.max_suggestions)
        .min(config.max_suggestions);
    let catalog = pipeline.catalog().catalog();

    let suggestions = scored_suggestions(&params.q, &catalog, limit)
        .into_iter()
        .map(|suggestion| SuggestionItem {
            segments: highlight(&suggestion.service, &params.q),
            service: suggestion.service,
            score: suggestion.score,
        })
        .collect();

    Json(SuggestResponse {
        query: params.q,
        suggestions,
    })
}
