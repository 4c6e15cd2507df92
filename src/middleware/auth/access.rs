//! Bearer-token verification middleware: exemption lookup -> gate -> AuthCtx
//! into request extensions.
//!
//! Routes registered in `PublicRoutes` (by exact path or group prefix) skip
//! the gate entirely; every other route must present a verifiable
//! `Authorization: Bearer <jwt>` header or the handler never runs.

use axum::{
    Router,
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AuthError;
use crate::state::AppState;

/// Apply the authentication middleware to a router.
///
/// Ex:
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so pass state
    // explicitly via from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    // Exemptions are keyed by the matched route path, which includes any
    // nest prefix by the time this layer runs.
    let exempt = req
        .extensions()
        .get::<MatchedPath>()
        .is_some_and(|matched| state.public_routes.is_public(matched.as_str()));

    if exempt {
        return Ok(next.run(req).await);
    }

    let claims = state.gate.authenticate(req.headers()).await?;

    // middleware -> extractor hand-off
    req.extensions_mut().insert(AuthCtx::new(claims));

    Ok(next.run(req).await)
}
