//! Provider Store Protocol
//!
//! Endpoints and Data Transfer Objects (DTOs) used to read and write provider documents
//! over HTTP, both by external clients and by nodes reading another node's collection.

use crate::catalog::types::ProviderDocument;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Full collection read (GET) and document creation (POST).
pub const ENDPOINT_PROVIDERS: &str = "/providers";
/// Single document upsert (PUT) and removal (DELETE).
pub const ENDPOINT_PROVIDER: &str = "/providers/:id";

// --- Data Transfer Objects ---

/// The entire provider collection, unfiltered.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PutProviderResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateProviderResponse {
    pub id: String,
}
