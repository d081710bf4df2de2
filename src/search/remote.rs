//! Remote Lookup
//!
//! Fetches the entire provider collection from a `ProviderStore` and filters it in
//! memory. The scan runs as its own task raced against a timer; when the timer wins,
//! the task is left to finish on its own and whatever it produces is dropped.

use super::engine::rank_matches;
use super::types::{SearchError, SearchResult};
use crate::catalog::types::{Provider, ProviderDocument};
use crate::store::types::ProviderStore;

use std::sync::Arc;
use std::time::Duration;

pub struct RemoteLookup {
    store: Arc<dyn ProviderStore>,
    timeout: Duration,
}

impl RemoteLookup {
    pub fn new(store: Arc<dyn ProviderStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Searches the remote collection for providers offering `term`.
    ///
    /// # Errors
    /// * `CollectionEmpty` if the store returned zero documents.
    /// * `Timeout` if fetch + filter did not finish within the configured budget.
    /// * `TransientFetch` for any store failure, or if the scan task panicked.
    pub async fn search(&self, term: &str) -> Result<Vec<SearchResult>, SearchError> {
        let store = self.store.clone();
        let owned_term = term.to_string();
        let scan = tokio::spawn(async move { scan_collection(store, &owned_term).await });

        match tokio::time::timeout(self.timeout, scan).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => {
                tracing::error!("Remote scan task for {:?} aborted: {}", term, join_err);
                Err(SearchError::TransientFetch(join_err.to_string()))
            }
            Err(_) => {
                tracing::warn!(
                    "Remote search for {:?} timed out after {:?}, late result will be discarded",
                    term,
                    self.timeout
                );
                Err(SearchError::Timeout(self.timeout))
            }
        }
    }
}

async fn scan_collection(
    store: Arc<dyn ProviderStore>,
    term: &str,
) -> Result<Vec<SearchResult>, SearchError> {
    let docs: Vec<ProviderDocument> = store.fetch_all().await.map_err(|e| {
        tracing::error!("Remote provider fetch failed: {}", e);
        SearchError::TransientFetch(e.to_string())
    })?;

    if docs.is_empty() {
        return Err(SearchError::CollectionEmpty);
    }

    let providers: Vec<Provider> = docs.iter().filter_map(Provider::from_document).collect();
    let results = rank_matches(term, &providers);

    tracing::debug!(
        "Remote search for {:?}: {} of {} documents matched",
        term,
        results.len(),
        docs.len()
    );
    Ok(results)
}
