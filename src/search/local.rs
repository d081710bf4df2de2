use super::engine::rank_matches;
use super::types::SearchResult;
use crate::catalog::types::ProviderSnapshot;

/// Local fallback lookup over an in-memory snapshot.
///
/// Never fails: a missing snapshot or a blank term yields an empty list.
pub fn local_search(term: &str, snapshot: Option<&ProviderSnapshot>) -> Vec<SearchResult> {
    let Some(snapshot) = snapshot else {
        tracing::debug!("Local search for {:?} skipped: no snapshot", term);
        return Vec::new();
    };

    let results = rank_matches(term, snapshot.providers());
    tracing::debug!(
        "Local search for {:?}: {} of {} providers matched",
        term,
        results.len(),
        snapshot.len()
    );
    results
}
