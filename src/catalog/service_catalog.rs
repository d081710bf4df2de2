//! Service Catalog
//!
//! The deduplicated set of known service names used for type-ahead suggestions, and the
//! shared handle through which sessions read consistent catalog/fallback snapshots.

use super::defaults;
use super::types::{Provider, ProviderDocument, ProviderSnapshot};
use crate::search::tokenizer::normalize;

use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Known service names, deduplicated case-insensitively.
///
/// The first display form seen for a service wins; order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceCatalog {
    entries: Vec<String>,
}

impl ServiceCatalog {
    pub fn from_services<I, S>(services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for service in services {
            let display = service.as_ref().trim();
            let key = normalize(display);
            if key.is_empty() || !seen.insert(key) {
                continue;
            }
            entries.push(display.to_string());
        }

        Self { entries }
    }

    /// Merges the static reference list with every service offered by `providers`.
    pub fn build(static_services: &[String], providers: &[Provider]) -> Self {
        let provider_services = providers
            .iter()
            .flat_map(|provider| provider.services.iter());

        Self::from_services(static_services.iter().chain(provider_services))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, service: &str) -> bool {
        let key = normalize(service);
        self.entries.iter().any(|entry| normalize(entry) == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct CatalogState {
    static_services: Vec<String>,
    catalog: Arc<ServiceCatalog>,
    fallback: Arc<ProviderSnapshot>,
}

/// Shared, cheaply cloneable view of the current catalog and fallback snapshot.
///
/// Readers take an `Arc` per operation so a concurrent rebuild never changes data
/// underneath a running suggestion or lookup. Only the change-feed watcher writes.
#[derive(Clone)]
pub struct CatalogHandle {
    state: Arc<RwLock<CatalogState>>,
}

impl CatalogHandle {
    pub fn new(static_services: Vec<String>, fallback: ProviderSnapshot) -> Self {
        let catalog = ServiceCatalog::build(&static_services, fallback.providers());
        Self {
            state: Arc::new(RwLock::new(CatalogState {
                static_services,
                catalog: Arc::new(catalog),
                fallback: Arc::new(fallback),
            })),
        }
    }

    /// Handle seeded with the bundled reference services and fallback providers.
    pub fn with_defaults() -> Self {
        Self::new(
            defaults::static_services(),
            defaults::fallback_snapshot(),
        )
    }

    pub fn catalog(&self) -> Arc<ServiceCatalog> {
        self.state.read().catalog.clone()
    }

    pub fn fallback(&self) -> Arc<ProviderSnapshot> {
        self.state.read().fallback.clone()
    }

    /// Rebuilds the catalog from a full-collection snapshot.
    ///
    /// A non-empty snapshot also becomes the last-known-good fallback. An empty one
    /// leaves the fallback alone and rebuilds the catalog from it instead.
    pub fn apply_snapshot(&self, docs: &[ProviderDocument]) {
        let snapshot = ProviderSnapshot::from_documents(docs);
        let mut state = self.state.write();

        if snapshot.is_empty() {
            let catalog = ServiceCatalog::build(&state.static_services, state.fallback.providers());
            tracing::warn!(
                "Provider collection is empty, catalog rebuilt from {} fallback providers",
                state.fallback.len()
            );
            state.catalog = Arc::new(catalog);
            return;
        }

        let catalog = ServiceCatalog::build(&state.static_services, snapshot.providers());
        tracing::debug!(
            "Catalog rebuilt: {} services from {} providers",
            catalog.len(),
            snapshot.len()
        );
        state.catalog = Arc::new(catalog);
        state.fallback = Arc::new(snapshot);
    }
}
