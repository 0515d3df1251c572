//! Saved-strategy CRUD endpoints
//!
//! Thin translation between HTTP and the strategy store; strategy payload
//! contents are stored verbatim, the way the builder front end sent them.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use infra_store::{NewStrategy, StoreError, StrategyStore, StrategyUpdate};

use super::{AppState, ErrorResponse};

/// Pagination query for the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    /// Records to skip
    #[serde(default)]
    pub offset: usize,
    /// Maximum records to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}

/// Build the strategy CRUD routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/strategies", post(create_handler).get(list_handler))
        .route(
            "/api/v1/strategies/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

fn not_found(id: u64) -> Response {
    let response = ErrorResponse {
        error: "not_found".to_string(),
        message: StoreError::NotFound(id).to_string(),
    };
    (StatusCode::NOT_FOUND, Json(response)).into_response()
}

/// POST /api/v1/strategies - Save a strategy
async fn create_handler(
    State(state): State<AppState>,
    Json(strategy): Json<NewStrategy>,
) -> Response {
    let record = state.store.create(strategy);
    tracing::info!(id = record.id, name = %record.name, "strategy saved");
    (StatusCode::CREATED, Json(record)).into_response()
}

/// GET /api/v1/strategies - List saved strategies
async fn list_handler(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    let records = state.store.list(query.offset, query.limit);
    (StatusCode::OK, Json(records)).into_response()
}

/// GET /api/v1/strategies/{id} - Fetch one strategy
async fn get_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get(id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
    }
}

/// PUT /api/v1/strategies/{id} - Update a strategy
async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(update): Json<StrategyUpdate>,
) -> Response {
    match state.store.update(id, update) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
    }
}

/// DELETE /api/v1/strategies/{id} - Delete a strategy
async fn delete_handler(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::NotFound(id)) => not_found(id),
    }
}
