//! The authenticated user as seen by the access guard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::UserId;
use crate::roles::Role;

/// An authenticated user.
///
/// The role is kept as the raw string issued at login so that a role outside
/// the closed set still reaches the guard, which resolves it fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Identity {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self::with_raw_role(id, name, email, role.as_str())
    }

    pub fn with_raw_role(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// The parsed role, or `None` when the raw role is not recognised.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}
