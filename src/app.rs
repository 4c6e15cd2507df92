/*
 * Responsibility
 * - Config loading -> dependency construction -> Router assembly
 * - middleware application (auth gate, request tracing)
 * - startup via axum::serve()
 */
use anyhow::Result;
use axum::Router;
use std::{panic, process, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::middleware::{
    self,
    auth::{AuthGate, PublicRoutes},
};
use crate::services::auth::JwtVerifier;
use crate::{api, config::Config, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,authgate=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost"
        // (stderr can be hidden depending on how the process is launched.)
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    // In development, fail fast on panics; in production keep serving.
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting authgate in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> AppState {
    let verifier = Arc::new(JwtVerifier::new(&config.jwt_secret));
    let gate = Arc::new(AuthGate::new(verifier));

    // Exemptions, registered once next to router assembly and read-only
    // afterwards. Paths are the full matched paths, nest prefix included.
    let public_routes = Arc::new(
        PublicRoutes::new()
            .route("/api/v1/health")
            .prefix("/api/v1/public"),
    );

    AppState::new(gate, public_routes)
}

fn build_router(state: AppState) -> Router {
    let v1 = api::v1::routes();
    let v1 = middleware::auth::access::apply(v1, state.clone());

    Router::new()
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::{Value, json};
    use std::time::{SystemTime, UNIX_EPOCH};
    use tower::ServiceExt;

    const SECRET: &str = "test-secret";

    fn test_router() -> Router {
        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            app_env: crate::config::AppEnv::Development,
            jwt_secret: SECRET.to_string(),
        };
        build_router(build_state(&config))
    }

    fn mint(payload: &Value) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            payload,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn exp_in(secs: i64) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        (now + secs) as u64
    }

    async fn get(router: Router, uri: &str, auth: Option<&str>) -> (StatusCode, Value) {
        let mut req = Request::builder().uri(uri);
        if let Some(value) = auth {
            req = req.header(header::AUTHORIZATION, value);
        }

        let resp = router.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    #[tokio::test]
    async fn health_is_reachable_without_credentials() {
        let (status, body) = get(test_router(), "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn public_group_is_reachable_without_credentials() {
        let (status, body) = get(test_router(), "/api/v1/public/version", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "authgate");
    }

    #[tokio::test]
    async fn protected_route_without_header_is_401() {
        let (status, body) = get(test_router(), "/api/v1/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"message": "Token not provided", "statusCode": 401})
        );
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_401_token_missing() {
        let (status, body) = get(test_router(), "/api/v1/me", Some("Token abc123")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"message": "Token not provided", "statusCode": 401})
        );
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler_with_its_claims() {
        let token = mint(&json!({
            "sub": "123",
            "role": "user",
            "exp": exp_in(600),
        }));

        let (status, body) = get(
            test_router(),
            "/api/v1/me",
            Some(&format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"sub": "123", "role": "user"}));
    }

    #[tokio::test]
    async fn expired_token_is_401_invalid_token() {
        let token = mint(&json!({"sub": "123", "exp": exp_in(-3600)}));

        let (status, body) = get(
            test_router(),
            "/api/v1/me",
            Some(&format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"message": "Invalid token", "statusCode": 401}));
    }

    #[tokio::test]
    async fn tampered_token_is_401_invalid_token() {
        let (status, body) = get(
            test_router(),
            "/api/v1/me",
            Some("Bearer not-a-real-token"),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"message": "Invalid token", "statusCode": 401}));
    }

    #[tokio::test]
    async fn token_without_sub_is_401_invalid_payload() {
        let token = mint(&json!({"email": "a@b.com", "exp": exp_in(600)}));

        let (status, body) = get(
            test_router(),
            "/api/v1/me",
            Some(&format!("Bearer {token}")),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            json!({"message": "Invalid token payload", "statusCode": 401})
        );
    }
}
