use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use lectern_auth::{identity_from_bearer, verify_token};
use lectern_core::AppError;
use lectern_models::Identity;

use crate::state::AppState;

/// Extractor that requires a valid session token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized("Invalid authorization header format".to_string())
        })?;

        let identity = verify_token(token, &state.jwt_config)?.identity()?;

        Ok(AuthUser(identity))
    }
}

/// Extractor for the caller's identity, `None` when not logged in.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Identity>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(current_identity(parts, state)))
    }
}

pub fn current_identity(parts: &Parts, state: &AppState) -> Option<Identity> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    identity_from_bearer(header, &state.jwt_config)
}
