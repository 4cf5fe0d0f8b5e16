//! JWT claims for session tokens.

use lectern_core::AppError;
use lectern_models::{Identity, UserId};
use serde::{Deserialize, Serialize};

/// Claims of a session token.
///
/// The role is carried verbatim; an unrecognised role survives decoding so
/// that the guard can resolve it fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid user ID in token".to_string()))
    }

    pub fn identity(&self) -> Result<Identity, AppError> {
        Ok(Identity::with_raw_role(
            self.user_id()?,
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
        ))
    }
}
