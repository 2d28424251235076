use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use etoile_noire::config::AppConfig;
use etoile_noire::db;
use etoile_noire::handlers;
use etoile_noire::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let db = match config.database_url.as_deref() {
        Some(path) => match db::init_db(path) {
            Ok(conn) => {
                tracing::info!(path, "document store ready");
                Some(Arc::new(Mutex::new(conn)))
            }
            Err(e) => {
                tracing::error!(error = %e, path, "failed to open document store, continuing without it");
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL not set, document store disabled");
            None
        }
    };

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
