//! Request handlers translating HTTP into store operations.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::StoreError;

/// Convert a handler result, logging rejections under `operation`.
fn finish<T: IntoResponse>(operation: &'static str, result: Result<T, ApiError>) -> Response {
    match result {
        Ok(body) => body.into_response(),
        Err(e) => {
            tracing::debug!(operation, error = %e, "Request rejected");
            e.into_response()
        }
    }
}

/// `POST /data`: merge a JSON object of strings into the store.
///
/// The body is parsed regardless of `Content-Type`. `null` is an empty batch.
pub async fn put_data(State(state): State<AppState>, body: Bytes) -> Response {
    let result = serde_json::from_slice::<Option<HashMap<String, String>>>(&body)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
        .map(|entries| {
            let entries = entries.unwrap_or_default();
            tracing::debug!(entries = entries.len(), "Storing entries");
            state.store.put_all(entries);
            StatusCode::CREATED
        });
    finish("put", result)
}

/// `GET /data`: every key and value as a JSON object.
pub async fn get_data(State(state): State<AppState>) -> Response {
    finish("get", Ok(Json(state.store.get_all())))
}

/// `DELETE /data/{*key}`.
pub async fn delete_data(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let result = state
        .store
        .delete(&key)
        .map(|()| StatusCode::OK)
        .map_err(ApiError::from);
    finish("delete", result)
}

/// `DELETE /data/`: the key segment is empty.
pub async fn delete_empty_key() -> Response {
    finish::<StatusCode>("delete", Err(StoreError::InvalidKey.into()))
}

/// `GET /stats`.
pub async fn get_stats(State(state): State<AppState>) -> Response {
    finish("stats", Ok(Json(state.store.stats())))
}

/// Fallback for unsupported methods on a known path.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Invalid request method")
}
