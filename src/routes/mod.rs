pub mod health;
pub mod menu;
pub mod pronote;

use std::sync::Arc;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::db::DocumentStore;
use crate::error::StorageError;
use crate::AppState;

/// Reject storage-backed requests when no store was configured at startup.
///
/// The process starts without a database on purpose; only the endpoints that
/// actually touch storage fail, one request at a time.
pub(crate) fn require_store(
    state: &AppState,
) -> Result<&Arc<dyn DocumentStore>, (StatusCode, Json<Value>)> {
    state.store.as_ref().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": StorageError::NotConfigured.to_string() })),
        )
    })
}
