use axum::{
    Json,
    extract::{Query, State},
};
use lectern_core::{AppError, ErrorResponse};
use tracing::instrument;

use super::model::{AccessCheckResponse, AccessQuery, NavigationResponse, PermissionsResponse};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::middleware::guard::{decide_route, redirect_location};
use crate::state::AppState;

/// Get the caller's sidebar navigation
#[utoipa::path(
    get,
    path = "/api/me/navigation",
    responses(
        (status = 200, description = "Navigation for the caller's role", body = NavigationResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Me"
)]
#[instrument(skip_all)]
pub async fn get_navigation(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<NavigationResponse>, AppError> {
    let registry = state.guard.registry();

    Ok(Json(NavigationResponse {
        home: registry.home_route_for(&identity.role).to_string(),
        dashboard: registry.dashboard_for(&identity.role),
        items: registry.navigation_for(&identity.role).to_vec(),
        role: identity.role,
    }))
}

/// Get the permissions granted to the caller's role
#[utoipa::path(
    get,
    path = "/api/me/permissions",
    responses(
        (status = 200, description = "Permissions of the caller's role", body = PermissionsResponse),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Me"
)]
#[instrument(skip_all)]
pub async fn get_permissions(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<PermissionsResponse>, AppError> {
    let permissions = state
        .guard
        .registry()
        .permissions_for(&identity.role)
        .to_vec();

    Ok(Json(PermissionsResponse {
        role: identity.role,
        permissions,
    }))
}

/// Ask the access guard about a navigation before making it
#[utoipa::path(
    get,
    path = "/api/me/access",
    params(AccessQuery),
    responses(
        (status = 200, description = "Guard decision for the caller and path", body = AccessCheckResponse),
    ),
    security(
        (),
        ("bearer_auth" = [])
    ),
    tag = "Me"
)]
#[instrument(skip_all)]
pub async fn check_access(
    State(state): State<AppState>,
    MaybeAuthUser(identity): MaybeAuthUser,
    Query(query): Query<AccessQuery>,
) -> Json<AccessCheckResponse> {
    let decision = decide_route(&state.guard, identity.as_ref(), &query.path);
    let location = redirect_location(&decision);

    Json(AccessCheckResponse { decision, location })
}
