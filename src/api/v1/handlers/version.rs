/*
 * Responsibility
 * - GET /public/version (service name + version)
 * - lives under the /public group, exempt via the group prefix
 */
use axum::{Json, response::IntoResponse};
use serde_json::json;

pub async fn version() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
