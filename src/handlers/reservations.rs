use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::documents::{self, Document};
use crate::errors::AppError;
use crate::models::reservation::{Reservation, ReservationCreate, COLLECTION};
use crate::state::AppState;

const DEFAULT_LIMIT: u32 = 20;

// POST /api/reservations
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    status: &'static str,
    id: String,
}

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReservationCreate>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let id = store_reservation(&state, payload).map_err(AppError::into_bad_request)?;
    tracing::info!(id = %id, "reservation created");

    Ok(Json(CreatedResponse { status: "ok", id }))
}

fn store_reservation(state: &AppState, payload: ReservationCreate) -> Result<String, AppError> {
    let reservation = Reservation::try_from(payload)?;
    state.with_db(|conn| documents::create_document(conn, COLLECTION, &reservation))
}

// GET /api/reservations
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    items: Vec<Document>,
}

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let items = state.with_db(|conn| {
        documents::get_documents(conn, COLLECTION, &Document::new(), limit)
    })?;

    Ok(Json(ListResponse { items }))
}
