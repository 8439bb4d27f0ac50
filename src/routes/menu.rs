use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::{
    models::menu::{CanteenMenuDay, MenuRangeQuery},
    routes::require_store,
    services::menu::MenuService,
    AppState,
};

/// POST /api/menu — enregistrer le menu d'un jour (réservé administration)
pub async fn create_menu_day(
    State(state): State<AppState>,
    Json(payload): Json<CanteenMenuDay>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = require_store(&state)?;

    MenuService::create(store.as_ref(), &payload)
        .await
        .map(|id| Json(json!({ "success": true, "id": id })))
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })
}

/// GET /api/menu/today — le menu d'aujourd'hui (date UTC), ou `null` s'il
/// n'y en a pas. Duplicate dates resolve to the earliest inserted document.
pub async fn get_today_menu(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = require_store(&state)?;
    let today = Utc::now().date_naive();

    MenuService::for_date(store.as_ref(), today)
        .await
        .map(|menu| Json(serde_json::to_value(menu).unwrap()))
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })
}

/// GET /api/menu?start=YYYY-MM-DD&end=YYYY-MM-DD — les menus entre deux
/// dates incluses, en storage-default order.
pub async fn get_menu_range(
    State(state): State<AppState>,
    Query(params): Query<MenuRangeQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let store = require_store(&state)?;

    MenuService::for_range(store.as_ref(), params.start, params.end)
        .await
        .map(|days| Json(serde_json::to_value(days).unwrap()))
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })
}
