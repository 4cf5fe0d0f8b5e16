//! Middleware and extractors.
//!
//! - [`auth`]: Identity extractors for the JSON API
//! - [`guard`]: The access guard applied to every dashboard view
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. The identity is decoded from the token; a missing or invalid token means
//!    "not logged in"
//! 3. Views: [`guard::guard_middleware`] asks the access guard and either runs
//!    the handler or answers with a redirect
//! 4. JSON API: [`auth::AuthUser`] rejects anonymous callers with `401`

pub mod auth;
pub mod guard;
