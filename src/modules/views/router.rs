use axum::{Router, middleware, routing::get};

use crate::middleware::guard::guard_middleware;
use crate::modules::views::controller::{health, login_prompt, render_view, root_redirect};
use crate::state::AppState;

/// Public routes that never pass through the guard.
///
/// `login_route` must not collide with `/` or `/health`; see
/// [`check_login_route`](crate::state::check_login_route).
pub fn init_public_router(login_route: &str) -> Router<AppState> {
    Router::new()
        .route("/", get(root_redirect))
        .route("/health", get(health))
        .route(login_route, get(login_prompt))
}

/// Every other path is a dashboard view behind the access guard.
pub fn init_views_router(state: AppState) -> Router {
    Router::new()
        .fallback(render_view)
        .layer(middleware::from_fn_with_state(state.clone(), guard_middleware))
        .with_state(state)
}
