//! # Lectern Models
//!
//! Domain types shared by the registry, the guard, the auth collaborator and
//! the HTTP layer.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed identifiers
//! - [`roles`]: The closed [`Role`] set, [`Permission`] tokens and [`RoutePrefix`]
//! - [`identity`]: The authenticated [`Identity`] read by the guard
//! - [`navigation`]: Sidebar entries, icons and dashboard kinds
//!
//! # Example
//!
//! ```ignore
//! use lectern_models::{Identity, Role, UserId};
//!
//! let identity = Identity::new(UserId::new(), "Ada", "ada@example.com", Role::Instructor);
//! assert_eq!(identity.role(), Some(Role::Instructor));
//! ```

pub mod identity;
pub mod ids;
pub mod navigation;
pub mod roles;

pub use identity::Identity;
pub use ids::UserId;
pub use navigation::{Dashboard, Icon, NavigationItem};
pub use roles::{Permission, Role, RoutePrefix, UnknownRole};
