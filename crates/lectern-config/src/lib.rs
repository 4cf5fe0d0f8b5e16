//! # Lectern Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`guard`]: Login route, registry file and bind address
//! - [`jwt`]: Token signing secret and lifetime
//! - [`cors`]: Allowed browser origins
//!
//! Each struct exposes `from_env()` and falls back to development defaults
//! when a variable is unset or cannot be parsed.
//!
//! # Example
//!
//! ```ignore
//! use lectern_config::{CorsConfig, GuardConfig, JwtConfig};
//!
//! let guard_config = GuardConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod guard;
pub mod jwt;

pub use cors::CorsConfig;
pub use guard::GuardConfig;
pub use jwt::JwtConfig;
