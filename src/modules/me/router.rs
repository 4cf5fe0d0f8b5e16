use axum::{Router, routing::get};

use crate::modules::me::controller::{check_access, get_navigation, get_permissions};
use crate::state::AppState;

pub fn init_me_router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(get_navigation))
        .route("/permissions", get(get_permissions))
        .route("/access", get(check_access))
}
