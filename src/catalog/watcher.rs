//! Change-Feed Watcher
//!
//! Bridges the store's full-collection change feed into a `CatalogHandle`. Subscription
//! lifecycle belongs to the store; the watcher simply exits when the feed closes.

use super::service_catalog::CatalogHandle;
use super::types::ProviderDocument;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Applies the current snapshot, then every subsequent one, until the sender is dropped.
pub fn spawn_catalog_watcher(
    handle: CatalogHandle,
    mut feed: watch::Receiver<Vec<ProviderDocument>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let initial = feed.borrow_and_update().clone();
        handle.apply_snapshot(&initial);
        tracing::info!("Catalog watcher started ({} documents)", initial.len());

        while feed.changed().await.is_ok() {
            let snapshot = feed.borrow_and_update().clone();
            handle.apply_snapshot(&snapshot);
        }

        tracing::info!("Provider change feed closed, catalog watcher stopping");
    })
}
