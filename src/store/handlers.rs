use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
};
use serde_json::Value;
use std::sync::Arc;

use super::memory::MemoryProviderStore;
use super::protocol::{CreateProviderResponse, ProvidersResponse, PutProviderResponse};

pub async fn handle_list_providers(
    Extension(store): Extension<Arc<MemoryProviderStore>>,
) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: store.snapshot(),
    })
}

pub async fn handle_put_provider(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<MemoryProviderStore>>,
    Json(data): Json<Value>,
) -> (StatusCode, Json<PutProviderResponse>) {
    if id.trim().is_empty() || !data.is_object() {
        tracing::error!("Rejected provider document {:?}: expected a JSON object", id);
        return (
            StatusCode::BAD_REQUEST,
            Json(PutProviderResponse { success: false }),
        );
    }

    store.upsert(id.trim(), data);
    (StatusCode::OK, Json(PutProviderResponse { success: true }))
}

pub async fn handle_create_provider(
    Extension(store): Extension<Arc<MemoryProviderStore>>,
    Json(data): Json<Value>,
) -> (StatusCode, Json<CreateProviderResponse>) {
    if !data.is_object() {
        tracing::error!("Rejected new provider document: expected a JSON object");
        return (
            StatusCode::BAD_REQUEST,
            Json(CreateProviderResponse { id: String::new() }),
        );
    }

    let id = store.insert_new(data);
    tracing::info!("Created provider {}", id);
    (StatusCode::CREATED, Json(CreateProviderResponse { id }))
}

pub async fn handle_delete_provider(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<MemoryProviderStore>>,
) -> StatusCode {
    if store.remove(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
