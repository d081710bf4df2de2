use crate::catalog::types::ProviderDocument;

use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`ProviderStore::fetch_all`].
pub type FetchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<ProviderDocument>>> + Send + 'a>>;

/// Read access to the full provider collection.
///
/// Implementations return every document they hold, unfiltered. Connectivity problems
/// surface as `Err`; an empty collection is a successful, empty `Vec`.
pub trait ProviderStore: Send + Sync {
    fn fetch_all(&self) -> FetchFuture<'_>;
}
