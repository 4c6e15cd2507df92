/*
 * Responsibility
 * - GET /me: echo the verified identity back to the caller
 * - only reachable through the gate; the extractor is the single source
 *   of identity for handlers
 */
use axum::Json;

use crate::api::v1::extractors::AuthCtxExtractor;
use crate::services::auth::TokenClaims;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<TokenClaims> {
    Json(ctx.claims)
}
