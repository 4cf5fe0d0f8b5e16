use anyhow::{Context, bail};
use lectern_auth::create_access_token;
use lectern_config::JwtConfig;
use lectern_models::{Identity, Role, UserId};
use validator::Validate;

/// Input for issuing a development access token.
#[derive(Debug, Validate)]
pub struct TokenRequest {
    pub id: Option<UserId>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub role: String,
}

/// Issues a signed access token for the requested identity.
///
/// Unrecognised roles are refused unless `allow_unknown_role` is set, which
/// is useful for exercising the guard's fail-closed path.
pub fn issue_token(
    request: TokenRequest,
    jwt_config: &JwtConfig,
    allow_unknown_role: bool,
) -> anyhow::Result<String> {
    request.validate().context("Invalid token request")?;

    if !allow_unknown_role && request.role.parse::<Role>().is_err() {
        bail!("Unknown role: {}", request.role);
    }

    let identity = Identity::with_raw_role(
        request.id.unwrap_or_default(),
        request.name,
        request.email,
        request.role,
    );

    create_access_token(&identity, jwt_config).map_err(|e| e.error)
}
