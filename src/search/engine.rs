use super::tokenizer::normalize;
use super::types::SearchResult;
use crate::catalog::types::Provider;

/// Relevance awarded when a provider lists the term exactly as typed.
pub const EXACT_MATCH_SCORE: u32 = 100;
/// Relevance awarded per matching service.
pub const MATCH_COUNT_SCORE: u32 = 10;

/// Filters `providers` down to those offering `term` and ranks them.
///
/// A service matches when it equals the term after trimming and lower-casing. Providers
/// listing the term with the exact casing typed sort first, then by descending number
/// of matching services. The sort is stable, so remaining ties keep collection order.
pub fn rank_matches<'a, I>(term: &str, providers: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = &'a Provider>,
{
    let typed = term.trim();
    let key = normalize(term);
    if key.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(bool, SearchResult)> = providers
        .into_iter()
        .filter_map(|provider| {
            let matching_services: Vec<String> = provider
                .services
                .iter()
                .filter(|service| normalize(service) == key)
                .cloned()
                .collect();

            if matching_services.is_empty() {
                return None;
            }

            let exact = matching_services.iter().any(|service| service == typed);
            let relevance_score = if exact { EXACT_MATCH_SCORE } else { 0 }
                + MATCH_COUNT_SCORE * matching_services.len() as u32;

            Some((
                exact,
                SearchResult {
                    provider: provider.clone(),
                    matching_services,
                    relevance_score,
                },
            ))
        })
        .collect();

    ranked.sort_by(|(a_exact, a), (b_exact, b)| {
        b_exact
            .cmp(a_exact)
            .then_with(|| b.matching_services.len().cmp(&a.matching_services.len()))
    });

    ranked.into_iter().map(|(_, result)| result).collect()
}
