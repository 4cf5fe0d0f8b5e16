use lectern_access::AccessDecision;
use lectern_models::{Dashboard, NavigationItem, Permission};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationResponse {
    pub role: String,
    pub home: String,
    pub dashboard: Option<Dashboard>,
    pub items: Vec<NavigationItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PermissionsResponse {
    pub role: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccessQuery {
    /// Path the client is about to navigate to.
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessCheckResponse {
    pub decision: AccessDecision,
    /// Redirect target, absent when the navigation is allowed.
    pub location: Option<String>,
}
