//! Provider Catalog Module
//!
//! Owns everything the search core knows about providers and the services they offer.
//!
//! ## Overview
//! Provider documents arrive from the store as loosely shaped JSON. This module is the
//! boundary where they are normalized into strict `Provider` records, and where the
//! deduplicated `ServiceCatalog` used for type-ahead suggestions is assembled from the
//! static reference list plus every service seen across the provider collection.
//!
//! ## Submodules
//! - **`types`**: `ProviderDocument` (raw), `Provider` (normalized) and `ProviderSnapshot`.
//! - **`service_catalog`**: The deduplicated catalog and the shared `CatalogHandle`.
//! - **`defaults`**: Bundled reference services and the offline fallback providers.
//! - **`watcher`**: Consumes store change-feed snapshots and keeps the handle current.

pub mod defaults;
pub mod service_catalog;
pub mod types;
pub mod watcher;
