use lectern_models::{Dashboard, NavigationItem, Role};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Descriptor of a rendered view.
///
/// Presentation lives in the front end; the server reports which dashboard
/// and navigation the caller gets.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewResponse {
    pub path: String,
    pub role: Role,
    pub dashboard: Option<Dashboard>,
    pub navigation: Vec<NavigationItem>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// Path to resume once the user has logged in.
    #[serde(rename = "returnTo")]
    #[param(rename = "returnTo")]
    pub return_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginPromptResponse {
    pub message: String,
    pub return_to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub roles: usize,
}
