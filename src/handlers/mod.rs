pub mod chat;
pub mod reservations;
pub mod root;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root::welcome))
        .route("/health", get(root::health))
        .route("/test", get(root::diagnostics))
        .route(
            "/api/reservations",
            post(reservations::create_reservation).get(reservations::list_reservations),
        )
        .route("/api/chat", post(chat::chat))
        .fallback(root::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
