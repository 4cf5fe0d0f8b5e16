//! Access guard middleware for the dashboard views.
//!
//! Every request that reaches the view router passes through
//! [`guard_middleware`]. The allow-list for a path comes from the registry's
//! view grants, so a path no role is granted is never rendered.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{Router, middleware};
//! use crate::middleware::guard::guard_middleware;
//!
//! let views = Router::new()
//!     .fallback(render_view)
//!     .layer(middleware::from_fn_with_state(state.clone(), guard_middleware));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use lectern_access::{AccessDecision, AccessGuard};
use lectern_models::Identity;

use crate::middleware::auth::current_identity;
use crate::state::AppState;

/// Runs the access guard for the requested path.
///
/// Allowed requests continue with the caller's [`Identity`](lectern_models::Identity)
/// in the request extensions; everything else becomes a `303 See Other`.
pub async fn guard_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let identity = current_identity(&parts, &state);
    let route = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| parts.uri.path());
    let decision = decide_route(&state.guard, identity.as_ref(), route);

    match redirect_location(&decision) {
        Some(location) => Redirect::to(&location).into_response(),
        None => {
            let mut req = Request::from_parts(parts, body);
            if let Some(identity) = identity {
                req.extensions_mut().insert(identity);
            }
            next.run(req).await
        }
    }
}

/// Decides a navigation to `route`, which may carry a query string.
///
/// Views are matched on the path alone; a login redirect keeps the whole
/// route so the user resumes exactly where they were heading.
pub fn decide_route(guard: &AccessGuard, identity: Option<&Identity>, route: &str) -> AccessDecision {
    let path = route.split(['?', '#']).next().unwrap_or(route);

    match guard.decide_for_view(identity, path) {
        AccessDecision::RedirectToLogin { login, .. } => AccessDecision::RedirectToLogin {
            login,
            return_to: route.to_string(),
        },
        decision => decision,
    }
}

/// Where a decision sends the browser, `None` for [`AccessDecision::Allow`].
///
/// Login redirects carry the requested path as `returnTo`.
pub fn redirect_location(decision: &AccessDecision) -> Option<String> {
    match decision {
        AccessDecision::Allow => None,
        AccessDecision::RedirectToLogin { login, return_to } => Some(format!(
            "{}?returnTo={}",
            login,
            urlencoding::encode(return_to)
        )),
        AccessDecision::RedirectToHome { target, .. } => Some(target.clone()),
    }
}
