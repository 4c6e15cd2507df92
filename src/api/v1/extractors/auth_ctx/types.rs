/*
 * Responsibility
 * - the identity type handlers see on authenticated requests
 * - the middleware verifies and inserts it into request extensions;
 *   handlers only ever read it
 *
 * Notes
 * - written once per request by the gate, never on a rejected request
 * - carries the decoded claims verbatim (nothing dropped, nothing added)
 */

use crate::services::auth::TokenClaims;

/// Verified identity attached to an admitted request.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub claims: TokenClaims,
}

impl AuthCtx {
    pub fn new(claims: TokenClaims) -> Self {
        Self { claims }
    }
}
