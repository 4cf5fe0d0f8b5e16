#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use lectern::lectern_access::RoleRegistry;
use lectern::lectern_auth::create_access_token;
use lectern::lectern_config::{CorsConfig, GuardConfig, JwtConfig};
use lectern::lectern_models::{Identity, UserId};
use lectern::router::init_router;
use lectern::state::AppState;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key-for-testing".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> Router {
    setup_test_app_with(GuardConfig::default())
}

pub fn setup_test_app_with(guard_config: GuardConfig) -> Router {
    let state = AppState::new(
        RoleRegistry::lms_default(),
        guard_config,
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    );
    init_router(state)
}

/// Issue a token for a user holding `role`, recognised or not.
pub fn token_for(role: &str) -> String {
    let identity = Identity::with_raw_role(UserId::new(), "Test User", "test@example.com", role);
    create_access_token(&identity, &test_jwt_config()).unwrap()
}

pub fn get(uri: &str, role: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(role) = role {
        builder = builder.header(
            header::AUTHORIZATION,
            format!("Bearer {}", token_for(role)),
        );
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    use http_body_util::BodyExt;

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
