//! Feature modules.
//!
//! - [`views`]: Guarded dashboard views, the login landing route and health
//! - [`me`]: JSON API describing what the caller may see

pub mod me;
pub mod views;
