/*
 * Responsibility
 * - AuthError: the three rejection kinds the gate can produce
 * - IntoResponse impl (HTTP 401 / JSON error body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Rejections produced by the authentication gate.
///
/// Every variant maps to HTTP 401 with a fixed message; the underlying
/// cause (which `jsonwebtoken` error, which claim was empty) is logged
/// by the gate but never serialized into the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header, a non-`Bearer` scheme, or an empty credential.
    #[error("Token not provided")]
    TokenMissing,

    /// The verifier rejected the token (signature, expiry, structure, ...).
    #[error("Invalid token")]
    TokenInvalid,

    /// The token verified but its payload has no usable `sub` claim.
    #[error("Invalid token payload")]
    PayloadInvalid,
}

#[derive(Serialize)]
struct UnauthorizedBody {
    message: String,
    #[serde(rename = "statusCode")]
    status_code: u16,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = UnauthorizedBody {
            message: self.to_string(),
            status_code: StatusCode::UNAUTHORIZED.as_u16(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(AuthError::TokenMissing.to_string(), "Token not provided");
        assert_eq!(AuthError::TokenInvalid.to_string(), "Invalid token");
        assert_eq!(
            AuthError::PayloadInvalid.to_string(),
            "Invalid token payload"
        );
    }

    #[test]
    fn responses_are_401() {
        for err in [
            AuthError::TokenMissing,
            AuthError::TokenInvalid,
            AuthError::PayloadInvalid,
        ] {
            let resp = err.into_response();
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
