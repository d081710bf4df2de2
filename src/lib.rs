//! Local Service Provider Directory Library
//!
//! The search core of a community directory where providers list up to three services
//! and searchers look them up by service keyword.
//!
//! ## Architecture Modules
//! The library is composed of five loosely coupled subsystems:
//!
//! - **`catalog`**: The provider boundary. Normalizes raw store documents into strict
//!   `Provider` records and maintains the `ServiceCatalog` used for suggestions.
//! - **`search`**: The information retrieval logic. Suggestion scoring, the shared
//!   filter/rank step, and the remote-index → local-cache lookup pipeline.
//! - **`session`**: One search bar's life cycle. Debouncing, ticketed dispatch with
//!   stale-response suppression, and the `SearchState` published to the host.
//! - **`store`**: The provider collection collaborator, in memory or over HTTP, with a
//!   full-snapshot change feed.
//! - **`config`**: Shared tunables (debounce, suggestion cap, remote timeout).

pub mod catalog;
pub mod config;
pub mod search;
pub mod session;
pub mod store;
