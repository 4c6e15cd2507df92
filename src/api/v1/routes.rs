/*
 * Responsibility
 * - v1 URL structure
 * - /health and the /public routes stay reachable without credentials; the
 *   exemption markers for them are registered next to state construction
 *   in app.rs
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me, version::version};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
        .nest("/public", Router::new().route("/version", get(version)))
}
