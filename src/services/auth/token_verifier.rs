use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin};

/// Access token claims.
///
/// NOTE:
/// - `sub` uses `#[serde(default)]` so a token without a subject still
///   decodes; the gate rejects the empty subject afterwards with its own
///   error kind instead of a generic decode failure.
/// - `email` and `role` are optional and pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Token verification seam.
///
/// Returns:
/// - `Ok(claims)`  => signature and registered claims (`exp`) check out
/// - `Err(_)`      => rejected for any reason; the caller logs the
///                    `ErrorKind` and treats every kind the same way
pub trait TokenVerifier: Send + Sync {
    fn verify<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<TokenClaims, jsonwebtoken::errors::Error>> + Send + 'a>>;
}

/// HS256 (shared secret) token verifier.
///
/// - Key material is intentionally not printable via Debug.
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        // Default validation: signature + exp (with default leeway).
        let validation = Validation::new(Algorithm::HS256);

        Self {
            decoding_key,
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify<'a>(
        &'a self,
        token: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<TokenClaims, jsonwebtoken::errors::Error>> + Send + 'a>>
    {
        Box::pin(async move {
            let data =
                jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;

            Ok(data.claims)
        })
    }
}
