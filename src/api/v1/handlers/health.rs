/*
 * Responsibility
 * - GET /health (liveness probe)
 * - registered as public at the handler level; must answer without credentials
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
