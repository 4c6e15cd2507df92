//! The admit/reject decision for one request.
//!
//! Pipeline: header extraction -> token verification -> claim-shape check.
//! Each stage fails with its own fixed rejection; verifier failures of any
//! kind collapse into `TokenInvalid` so clients never learn which check
//! tripped, while the log line keeps the detail for operators.

use std::sync::Arc;

use axum::http::{HeaderMap, header};

use crate::error::AuthError;
use crate::services::auth::{TokenClaims, TokenVerifier};

pub struct AuthGate {
    verifier: Arc<dyn TokenVerifier>,
}

impl AuthGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Verify the request's bearer credential and return its claims.
    ///
    /// Pure decision: no retries, no state. The caller attaches the claims
    /// to the request on `Ok`; nothing is attached on `Err`.
    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<TokenClaims, AuthError> {
        // Missing/non-Bearer/empty credentials are ordinary client errors,
        // rejected without logging.
        let token = extract_bearer(headers).ok_or(AuthError::TokenMissing)?;

        let claims = match self.verifier.verify(token).await {
            Ok(claims) => claims,
            Err(err) => {
                tracing::error!(
                    kind = ?err.kind(),
                    error = %err,
                    "token verification failed"
                );
                return Err(AuthError::TokenInvalid);
            }
        };

        if claims.sub.trim().is_empty() {
            tracing::warn!("token payload missing sub claim");
            return Err(AuthError::PayloadInvalid);
        }

        Ok(claims)
    }
}

/// `Authorization: Bearer <token>`, split on the first space.
///
/// Any other shape (absent header, non-UTF-8 value, different scheme,
/// empty credential) reads as "no token". Scheme match is case-sensitive.
fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if scheme != "Bearer" || token.is_empty() {
        return None;
    }

    Some(token)
}
