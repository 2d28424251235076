use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::db::documents;
use crate::state::AppState;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

// GET /
pub async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to Étoile Noire Backend" }))
}

// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "detail": "Not Found" })),
    )
}

// GET /test
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    backend: String,
    database: String,
    database_url: Option<String>,
    database_name: Option<String>,
    connection_status: String,
    collections: Vec<String>,
}

pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if state.db.is_none() {
        response.database = "⚠️  Available but not initialized".to_string();
        return Json(response);
    }

    response.database = "✅ Available".to_string();
    response.database_url = Some(
        if state.config.database_url.is_some() {
            "✅ Set"
        } else {
            "❌ Not Set"
        }
        .to_string(),
    );
    response.database_name = Some(
        state
            .config
            .store_name()
            .unwrap_or_else(|| "✅ Connected".to_string()),
    );
    response.connection_status = "Connected".to_string();

    match state.with_db(documents::list_collection_names) {
        Ok(names) => {
            response.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "store probe failed");
            response.database = format!(
                "⚠️  Connected but Error: {}",
                truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
            );
        }
    }

    Json(response)
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 50), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("Étoile", 2), "Ét");
    }
}
