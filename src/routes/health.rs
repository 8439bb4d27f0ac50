use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Backend Lycée Charles de Gaulle opérationnel" }))
}

/// GET /api/hello
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Bienvenue sur l'API du Lycée Charles de Gaulle" }))
}

/// GET /test — storage connectivity diagnostics: configuration flags,
/// connection status and the first collection names visible in the store.
pub async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let mut database = "❌ Not Available".to_string();
    let mut connection_status = "Not Connected";
    let mut collections: Vec<String> = Vec::new();

    if let Some(store) = &state.store {
        connection_status = "Connected";
        match store.collection_names().await {
            Ok(names) => {
                collections = names.into_iter().take(10).collect();
                database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let brief: String = e.to_string().chars().take(50).collect();
                database = format!("⚠️  Connected but Error: {brief}");
            }
        }
    }

    Json(json!({
        "backend": "✅ Running",
        "database": database,
        "database_url": if state.config.database_url.is_some() { "✅ Set" } else { "❌ Not Set" },
        "database_name": if state.config.database_name.is_some() { "✅ Set" } else { "❌ Not Set" },
        "connection_status": connection_status,
        "collections": collections,
    }))
}
