use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lycee_api::config::{Config, DEFAULT_DATABASE_NAME};
use lycee_api::db::mongo::MongoStore;
use lycee_api::db::DocumentStore;
use lycee_api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    // A missing or unusable database must not prevent startup; the affected
    // endpoints fail per-request instead.
    let store: Option<Arc<dyn DocumentStore>> = match &config.database_url {
        Some(url) => {
            let name = config
                .database_name
                .as_deref()
                .unwrap_or(DEFAULT_DATABASE_NAME);
            match MongoStore::connect(url, name).await {
                Ok(store) => {
                    info!("Document store configured (database: {})", store.database_name());
                    Some(Arc::new(store))
                }
                Err(e) => {
                    warn!("Document store unavailable: {}", e);
                    None
                }
            }
        }
        None => {
            warn!("DATABASE_URL not set — menu endpoints will fail until it is configured");
            None
        }
    };

    let state = AppState {
        store,
        config: config.clone(),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Lycée Charles de Gaulle API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
