// Library exports for the api binary and tests
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::DocumentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and never re-acquired. `None` when no
    /// connection string is configured; storage-backed endpoints then fail
    /// per-request.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub config: Arc<Config>,
}

/// Assemble the full HTTP surface over the given state.
pub fn build_router(state: AppState) -> Router {
    // Open CORS policy: all origins, methods and headers.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/api/hello", get(routes::health::hello))
        .route("/test", get(routes::health::test_database))
        // Cantine
        .route(
            "/api/menu",
            get(routes::menu::get_menu_range).post(routes::menu::create_menu_day),
        )
        .route("/api/menu/today", get(routes::menu::get_today_menu))
        // Pronote (simulation)
        .route("/api/pronote/timetable", post(routes::pronote::get_timetable))
        .route("/api/pronote/absences", post(routes::pronote::get_absences))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
