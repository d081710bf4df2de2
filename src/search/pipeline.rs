//! Two-Tier Search Pipeline
//!
//! Remote lookup first; local fallback when the remote side fails or has no match.
//! Every remote error is absorbed here, so callers only ever see a `SearchOutcome`.

use super::local::local_search;
use super::remote::RemoteLookup;
use super::tokenizer::normalize;
use super::types::{ResultSource, SearchOutcome};
use crate::catalog::service_catalog::CatalogHandle;

use std::sync::Arc;

#[derive(Clone)]
pub struct SearchPipeline {
    remote: Arc<RemoteLookup>,
    catalog: CatalogHandle,
}

impl SearchPipeline {
    pub fn new(remote: Arc<RemoteLookup>, catalog: CatalogHandle) -> Self {
        Self { remote, catalog }
    }

    pub fn catalog(&self) -> &CatalogHandle {
        &self.catalog
    }

    /// Resolves `term` to a settled outcome.
    ///
    /// 1. Blank term: `Empty`, no lookup issued.
    /// 2. Remote matches: `Resolved` from `Remote`.
    /// 3. Remote answered without matches: local lookup, `Resolved` from `LocalCache`
    ///    or `NoMatches`.
    /// 4. Remote failed (`CollectionEmpty`, `Timeout`, `TransientFetch`): `FallenBack`
    ///    carrying the local results.
    pub async fn run(&self, term: &str) -> SearchOutcome {
        let key = normalize(term);
        if key.is_empty() {
            return SearchOutcome::Empty;
        }
        let typed = term.trim();

        match self.remote.search(typed).await {
            Ok(results) if !results.is_empty() => SearchOutcome::Resolved {
                term: key,
                results,
                source: ResultSource::Remote,
            },
            Ok(_) => {
                let fallback = self.catalog.fallback();
                let results = local_search(typed, Some(&*fallback));
                if results.is_empty() {
                    tracing::debug!("No provider offers {:?}", key);
                    SearchOutcome::NoMatches { term: key }
                } else {
                    SearchOutcome::Resolved {
                        term: key,
                        results,
                        source: ResultSource::LocalCache,
                    }
                }
            }
            Err(cause) => {
                let fallback = self.catalog.fallback();
                let results = local_search(typed, Some(&*fallback));
                tracing::warn!(
                    "Falling back to local search for {:?} ({}): {} results",
                    key,
                    cause,
                    results.len()
                );
                SearchOutcome::FallenBack {
                    term: key,
                    results,
                    cause,
                }
            }
        }
    }
}
