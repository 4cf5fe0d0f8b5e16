use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::me::model::{AccessCheckResponse, NavigationResponse, PermissionsResponse};
use crate::modules::views::model::{HealthResponse, LoginPromptResponse, ViewResponse};
use lectern_access::{AccessDecision, DenyReason};
use lectern_core::ErrorResponse;
use lectern_models::{Dashboard, Icon, NavigationItem, Permission, Role};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::views::controller::render_view,
        crate::modules::views::controller::login_prompt,
        crate::modules::views::controller::health,
        crate::modules::me::controller::get_navigation,
        crate::modules::me::controller::get_permissions,
        crate::modules::me::controller::check_access,
    ),
    components(
        schemas(
            Role,
            Permission,
            Dashboard,
            Icon,
            NavigationItem,
            AccessDecision,
            DenyReason,
            ViewResponse,
            LoginPromptResponse,
            HealthResponse,
            NavigationResponse,
            PermissionsResponse,
            AccessCheckResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Views", description = "Guarded dashboard views"),
        (name = "Me", description = "What the caller may see and do")
    ),
    info(
        title = "Lectern",
        version = "0.1.0",
        description = "Role-based access control and route guard for the LMS dashboards.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
