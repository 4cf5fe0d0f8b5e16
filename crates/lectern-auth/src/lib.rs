//! # Lectern Auth
//!
//! The identity collaborator of the access guard. Login and logout happen
//! elsewhere; this crate only turns a signed session token into the
//! [`Identity`](lectern_models::Identity) the guard reads, and issues such
//! tokens for tooling.
//!
//! - [`claims`]: JWT claim structure carrying the identity
//! - [`jwt`]: Token creation and verification
//!
//! # Example
//!
//! ```ignore
//! use lectern_auth::{create_access_token, verify_token};
//! use lectern_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&identity, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.identity()?, identity);
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, identity_from_bearer, verify_token};
