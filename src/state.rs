use std::sync::Arc;

use anyhow::{Context, bail};
use lectern_access::{AccessGuard, RoleRegistry};
use lectern_config::{CorsConfig, GuardConfig, JwtConfig};
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
    pub guard: AccessGuard,
    pub guard_config: GuardConfig,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        registry: RoleRegistry,
        guard_config: GuardConfig,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        let guard = AccessGuard::new(Arc::new(registry))
            .with_login_route(guard_config.login_route.clone());

        Self {
            guard,
            guard_config,
            jwt_config,
            cors_config,
        }
    }
}

const RESERVED_ROUTES: [&str; 2] = ["/", "/health"];
const RESERVED_PREFIXES: [&str; 2] = ["/api", "/swagger-ui"];

/// Rejects a login route the public router cannot serve.
///
/// The login page must stay reachable without a session, so it may not
/// shadow another public route or fall under a guarded view.
pub fn check_login_route(registry: &RoleRegistry, login_route: &str) -> anyhow::Result<()> {
    if RESERVED_ROUTES.contains(&login_route)
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| login_route.starts_with(prefix))
    {
        bail!("login route {} collides with a built-in route", login_route);
    }

    let roles = registry.roles_for_view(login_route);
    if !roles.is_empty() {
        let roles: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
        bail!(
            "login route {} is a guarded view of {}",
            login_route,
            roles.join(", ")
        );
    }

    Ok(())
}

/// Builds the state from the environment, loading `REGISTRY_PATH` when set.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let guard_config = GuardConfig::from_env();

    let registry = match &guard_config.registry_path {
        Some(path) => {
            info!(path = %path.display(), "loading role registry");
            RoleRegistry::from_path(path)
                .with_context(|| format!("invalid role registry {}", path.display()))?
        }
        None => RoleRegistry::lms_default(),
    };

    check_login_route(&registry, &guard_config.login_route)?;

    Ok(AppState::new(
        registry,
        guard_config,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_route_accepts_public_paths() {
        let registry = RoleRegistry::lms_default();

        assert!(check_login_route(&registry, "/login").is_ok());
        assert!(check_login_route(&registry, "/auth/sign-in").is_ok());
    }

    #[test]
    fn test_login_route_rejects_builtin_routes() {
        let registry = RoleRegistry::lms_default();

        for route in ["/", "/health", "/api/me/access", "/swagger-ui"] {
            let err = check_login_route(&registry, route).unwrap_err();
            assert!(err.to_string().contains("collides with a built-in route"));
        }
    }

    #[test]
    fn test_login_route_rejects_guarded_view() {
        let registry = RoleRegistry::lms_default();

        let err = check_login_route(&registry, "/student/dashboard/login").unwrap_err();
        assert_eq!(
            err.to_string(),
            "login route /student/dashboard/login is a guarded view of student"
        );
    }
}
