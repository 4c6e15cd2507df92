/*
 * Responsibility
 * - shared context attached to the Router (AppState)
 *   - gate: the authentication decision, built once from the configured secret
 *   - public_routes: exemption registry, frozen after router assembly
 * - Clone-friendly (internals are Arc / cheap to clone)
 */
use std::sync::Arc;

use crate::middleware::auth::{AuthGate, PublicRoutes};

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<AuthGate>,
    pub public_routes: Arc<PublicRoutes>,
}

impl AppState {
    pub fn new(gate: Arc<AuthGate>, public_routes: Arc<PublicRoutes>) -> Self {
        Self {
            gate,
            public_routes,
        }
    }
}
