use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lectern_access::{AccessGuard, RoleRegistry};
use lectern_models::{Identity, Role, UserId};

/// Loads the registry file at `path`, or the built-in LMS table.
pub fn load_registry(path: Option<&Path>) -> anyhow::Result<RoleRegistry> {
    match path {
        Some(path) => RoleRegistry::from_path(path)
            .with_context(|| format!("Failed to load role registry from {}", path.display())),
        None => Ok(RoleRegistry::lms_default()),
    }
}

pub fn list_roles(registry: &RoleRegistry) -> String {
    let mut out = String::new();

    for entry in registry.entries() {
        let prefixes: Vec<&str> = entry.prefixes.iter().map(|p| p.as_str()).collect();

        out.push_str(&format!("{} ({})\n", entry.role, entry.role.display_name()));
        out.push_str(&format!("   Home: {}\n", entry.home));
        out.push_str(&format!("   Prefixes: {}\n", prefixes.join(", ")));
        out.push_str(&format!("   Views: {}\n", entry.views.len()));
        out.push_str(&format!("   Permissions: {}\n", entry.permissions.len()));
    }

    out
}

/// Evaluates the access guard and renders the decision as JSON.
///
/// Without `role` the caller is anonymous. Without `allow` the view's
/// allow-list comes from the registry.
pub fn check(
    registry: RoleRegistry,
    login_route: &str,
    role: Option<&str>,
    path: &str,
    allow: Option<&[Role]>,
) -> anyhow::Result<String> {
    let guard = AccessGuard::new(Arc::new(registry)).with_login_route(login_route);
    let identity =
        role.map(|role| Identity::with_raw_role(UserId::from_u128(0), "cli", "cli@localhost", role));

    let decision = match allow {
        Some(allow) => guard.decide(identity.as_ref(), path, allow),
        None => guard.decide_for_view(identity.as_ref(), path),
    };

    serde_json::to_string_pretty(&decision).context("Failed to render access decision")
}

pub fn navigation(registry: &RoleRegistry, role: &str) -> anyhow::Result<String> {
    let entry = registry
        .entry(role)
        .with_context(|| format!("Unknown role: {}", role))?;

    let mut out = format!("Home: {}\n", entry.home);
    for item in &entry.navigation {
        out.push_str(&format!("   {:<16} {}\n", item.name, item.href));
    }

    Ok(out)
}

pub fn validate(path: &Path) -> anyhow::Result<String> {
    let registry = load_registry(Some(path))?;

    Ok(format!(
        "Registry {} is valid: {} roles, {} views",
        path.display(),
        registry.entries().count(),
        registry.views().len()
    ))
}
