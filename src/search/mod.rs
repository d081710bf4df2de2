//! Search Module
//!
//! Type-ahead suggestions and the two-tier provider lookup.
//!
//! ## Overview
//! The provider "index" is a full collection scan with client-side filtering. A lookup
//! first asks the remote store (bounded by a timeout) and falls back to the locally held
//! provider snapshot when the remote side fails, is empty, or has no matches.
//!
//! ## Submodules
//! - **`tokenizer`**: Query/service normalization shared by every matcher.
//! - **`suggest`**: The suggestion scorer over the `ServiceCatalog`.
//! - **`highlight`**: Splits a suggestion into matched and unmatched segments.
//! - **`engine`**: The filter/rank step shared by remote and local lookups.
//! - **`remote`**: Remote lookup against a `ProviderStore`, raced against a timeout.
//! - **`local`**: Local fallback lookup over an in-memory snapshot.
//! - **`pipeline`**: Remote-then-local resolution producing a `SearchOutcome`.
//! - **`handlers`**: HTTP handlers for the Axum web server.
//! - **`types`**: Results, suggestions, outcomes, errors and API DTOs.

pub mod engine;
pub mod handlers;
pub mod highlight;
pub mod local;
pub mod pipeline;
pub mod remote;
pub mod suggest;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;
