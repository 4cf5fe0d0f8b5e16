//! Session token creation and verification.
//!
//! Tokens are HS256 JWTs signed with [`JwtConfig::secret`]. Verification
//! checks the signature and expiry only; role interpretation is left to the
//! access guard.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use lectern_config::JwtConfig;
use lectern_core::AppError;
use lectern_models::Identity;
use tracing::debug;

use crate::claims::Claims;

/// Issues a session token for `identity`.
///
/// # Errors
///
/// Returns an internal error if token encoding fails.
pub fn create_access_token(identity: &Identity, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: identity.id.to_string(),
        name: identity.name.clone(),
        email: identity.email.clone(),
        role: identity.role.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a session token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if the signature is invalid, the token has
/// expired or it is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token".to_string()))
}

/// Resolves the current identity from an `Authorization` header value.
///
/// Anything short of a valid `Bearer` token means "not logged in".
pub fn identity_from_bearer(header: Option<&str>, jwt_config: &JwtConfig) -> Option<Identity> {
    let token = header?.strip_prefix("Bearer ")?;

    match verify_token(token, jwt_config).and_then(|claims| claims.identity()) {
        Ok(identity) => Some(identity),
        Err(err) => {
            debug!(error = %err, "ignoring unusable session token");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_models::{Role, UserId};

    fn create_test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn create_test_identity() -> Identity {
        Identity::new(UserId::from_u128(5), "Linus", "linus@example.com", Role::Student)
    }

    #[test]
    fn test_create_and_verify_token() {
        let config = create_test_config();
        let identity = create_test_identity();

        let token = create_access_token(&identity, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, identity.id.to_string());
        assert_eq!(claims.role, "student");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.identity().unwrap(), identity);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let token = create_access_token(&create_test_identity(), &create_test_config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            access_token_expiry: 3600,
        };

        let err = verify_token(&token, &other).unwrap_err();
        assert_eq!(err.error.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_verify_expired_token() {
        let config = create_test_config();
        let claims = Claims {
            sub: UserId::from_u128(5).to_string(),
            name: "Linus".to_string(),
            email: "linus@example.com".to_string(),
            role: "student".to_string(),
            exp: 1_000_000,
            iat: 999_000,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_err());
    }

    #[test]
    fn test_identity_from_bearer() {
        let config = create_test_config();
        let identity = create_test_identity();
        let header = format!("Bearer {}", create_access_token(&identity, &config).unwrap());

        assert_eq!(identity_from_bearer(Some(&header), &config), Some(identity));
    }

    #[test]
    fn test_identity_from_bearer_rejects_bad_headers() {
        let config = create_test_config();

        assert_eq!(identity_from_bearer(None, &config), None);
        assert_eq!(identity_from_bearer(Some("Basic abc"), &config), None);
        assert_eq!(identity_from_bearer(Some("Bearer not.a.jwt"), &config), None);
    }
}
