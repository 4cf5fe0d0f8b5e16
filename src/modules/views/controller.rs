use axum::{
    Extension, Json,
    extract::{Query, State},
    http::Uri,
    response::Redirect,
};
use lectern_core::AppError;
use lectern_models::Identity;
use tracing::instrument;

use super::model::{HealthResponse, LoginPromptResponse, LoginQuery, ViewResponse};
use crate::state::AppState;

/// Render a dashboard view.
///
/// Only reached after the access guard allowed the navigation; anonymous
/// callers are redirected to the login route and callers without a grant
/// for the path are redirected to their home route.
#[utoipa::path(
    get,
    path = "/{view}",
    params(
        ("view" = String, Path, description = "Dashboard view, e.g. student/dashboard")
    ),
    responses(
        (status = 200, description = "View allowed", body = ViewResponse),
        (status = 303, description = "Redirect to login or to the caller's home route"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Views"
)]
#[instrument(skip_all)]
pub async fn render_view(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    uri: Uri,
) -> Result<Json<ViewResponse>, AppError> {
    let registry = state.guard.registry();
    let role = identity
        .role()
        .ok_or_else(|| AppError::forbidden(format!("Unknown role: {}", identity.role)))?;

    Ok(Json(ViewResponse {
        path: uri.path().to_string(),
        role,
        dashboard: registry.dashboard_for(&identity.role),
        navigation: registry.navigation_for(&identity.role).to_vec(),
    }))
}

/// Landing route for unauthenticated navigations
#[utoipa::path(
    get,
    path = "/login",
    params(LoginQuery),
    responses(
        (status = 200, description = "Login required", body = LoginPromptResponse),
    ),
    tag = "Views"
)]
pub async fn login_prompt(Query(query): Query<LoginQuery>) -> Json<LoginPromptResponse> {
    Json(LoginPromptResponse {
        message: "Login required".to_string(),
        return_to: query.return_to,
    })
}

pub async fn root_redirect(State(state): State<AppState>) -> Redirect {
    Redirect::to(&state.guard_config.login_route)
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "Views"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        roles: state.guard.registry().entries().count(),
    })
}
