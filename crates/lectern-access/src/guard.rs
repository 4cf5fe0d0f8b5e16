//! The access guard.
//!
//! A pure decision procedure run once per protected navigation. It reads the
//! identity handed to it, never ambient state, and always produces one of
//! three outcomes. Malformed input degrades to a redirect, never to
//! [`AccessDecision::Allow`].

use std::sync::Arc;

use lectern_models::{Identity, Role};
use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::registry::RoleRegistry;

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Why an authenticated navigation was sent back to the home route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The role string is not part of the closed role set.
    UnknownRole,
    /// The path starts with none of the role's route prefixes.
    OutsidePrefixes,
    /// The view's explicit allow-list does not contain the role.
    NotInViewAllowList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    /// No identity; `return_to` is the path to resume after login.
    RedirectToLogin { login: String, return_to: String },
    RedirectToHome { target: String, reason: DenyReason },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Result of [`AccessGuard::guard`]: the rendered view or the redirect to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Render(V),
    Redirect(AccessDecision),
}

#[derive(Debug, Clone)]
pub struct AccessGuard {
    registry: Arc<RoleRegistry>,
    login_route: String,
}

impl AccessGuard {
    pub fn new(registry: Arc<RoleRegistry>) -> Self {
        Self {
            registry,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }

    pub fn with_login_route(mut self, login_route: impl Into<String>) -> Self {
        self.login_route = login_route.into();
        self
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    /// Decides a navigation to `path` for a view open to `required_roles`.
    ///
    /// Both checks must pass: the path must start with one of the role's
    /// prefixes, and the role must be on the view's allow-list.
    pub fn decide(
        &self,
        identity: Option<&Identity>,
        path: &str,
        required_roles: &[Role],
    ) -> AccessDecision {
        let Some(identity) = identity else {
            let decision = AccessDecision::RedirectToLogin {
                login: self.login_route.clone(),
                return_to: path.to_string(),
            };
            debug!(path, outcome = ?decision, "access decision");
            return decision;
        };

        let raw_role = identity.role.as_str();
        let home = self.registry.home_route_for(raw_role);

        let decision = match identity.role() {
            None => {
                warn!(
                    user_id = %identity.id,
                    role = raw_role,
                    path,
                    "unrecognised role, redirecting to safe root"
                );
                AccessDecision::RedirectToHome {
                    target: home.to_string(),
                    reason: DenyReason::UnknownRole,
                }
            }
            Some(_) if !self.registry.can_access_route(raw_role, path) => {
                AccessDecision::RedirectToHome {
                    target: home.to_string(),
                    reason: DenyReason::OutsidePrefixes,
                }
            }
            Some(role) if !required_roles.contains(&role) => AccessDecision::RedirectToHome {
                target: home.to_string(),
                reason: DenyReason::NotInViewAllowList,
            },
            Some(_) => AccessDecision::Allow,
        };

        debug!(
            user_id = %identity.id,
            role = raw_role,
            path,
            outcome = ?decision,
            "access decision"
        );

        decision
    }

    /// Like [`decide`](Self::decide), with the allow-list taken from the
    /// registry's view grants.
    pub fn decide_for_view(&self, identity: Option<&Identity>, path: &str) -> AccessDecision {
        let required: Vec<Role> = self.registry.roles_for_view(path).into_iter().collect();
        self.decide(identity, path, &required)
    }

    /// Runs `render` only when the navigation is allowed.
    pub fn guard<V>(
        &self,
        identity: Option<&Identity>,
        path: &str,
        required_roles: &[Role],
        render: impl FnOnce() -> V,
    ) -> Guarded<V> {
        match self.decide(identity, path, required_roles) {
            AccessDecision::Allow => Guarded::Render(render()),
            redirect => Guarded::Redirect(redirect),
        }
    }
}
