//! # Lectern Access
//!
//! Role-based access control for the LMS dashboards.
//!
//! - [`registry`]: The [`RoleRegistry`], one validated entry per role
//! - [`defaults`]: The built-in LMS role table
//! - [`guard`]: The [`AccessGuard`] decision procedure
//! - [`error`]: Registry configuration errors
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use lectern_access::{AccessDecision, AccessGuard, RoleRegistry};
//! use lectern_models::Role;
//!
//! let guard = AccessGuard::new(Arc::new(RoleRegistry::lms_default()));
//!
//! match guard.decide(Some(&identity), "/admin/dashboard", &[Role::Admin]) {
//!     AccessDecision::Allow => render(),
//!     other => redirect(other),
//! }
//! ```

pub mod defaults;
pub mod error;
pub mod guard;
pub mod registry;

pub use error::RegistryError;
pub use guard::{AccessDecision, AccessGuard, DenyReason, Guarded};
pub use registry::{RegistryFile, RoleEntry, RoleRegistry, SAFE_ROOT, SUBTREE_SUFFIX, view_matches};
