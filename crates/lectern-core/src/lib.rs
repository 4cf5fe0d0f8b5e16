//! # Lectern Core
//!
//! Foundational types shared by every Lectern crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission token constants granted to LMS roles
//!
//! # Example
//!
//! ```ignore
//! use lectern_core::errors::AppError;
//! use lectern_core::permissions;
//!
//! let error = AppError::unauthorized("Missing authorization header".to_string());
//!
//! if registry.has_permission("admin", permissions::MANAGE_USERS) {
//!     // ...
//! }
//! ```

pub mod errors;
pub mod permissions;

pub use errors::{AppError, ErrorResponse};
