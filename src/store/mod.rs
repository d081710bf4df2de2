//! Provider Store Module
//!
//! The remote collaborator that owns provider documents. The search core only ever
//! reads full-collection snapshots from it; filtering and pagination never happen here.
//!
//! ## Core Concepts
//! - **`ProviderStore`**: The read contract (`fetch_all`) consumed by the remote lookup.
//! - **Change feed**: Every write publishes the full collection on a `watch` channel,
//!   which the catalog watcher turns into a fresh `ServiceCatalog`.
//! - **Transport**: A node can host the collection in memory (`memory`) and expose it
//!   over HTTP (`handlers`), or read another node's collection (`http`).

pub mod handlers;
pub mod http;
pub mod memory;
pub mod protocol;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
