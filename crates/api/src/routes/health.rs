use axum::extract::State;
use axum::{routing::get, Json, Router};
use folio_core::types::Timestamp;
use serde::Serialize;

use crate::response::MessageResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    /// Deployment name from `APP_ENV`.
    pub environment: String,
    pub timestamp: Timestamp,
    /// Whether the database is reachable.
    pub db_connected: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_connected = state.projects.store_connected().await;

    let status = if db_connected { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now(),
        db_connected,
    })
}

/// GET / -- welcome message.
async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Portfolio API".to_string(),
    })
}

/// Mount service-level routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}
