//! # Lectern
//!
//! The route-protection layer of an LMS with six role dashboards: student,
//! instructor, admin, super admin, parent and auditor.
//!
//! ## Overview
//!
//! - **Role Registry**: one validated entry per role with its permissions,
//!   route prefixes, granted views, home route and navigation
//! - **Access Guard**: a pure decision per navigation, redirecting to the
//!   login route, to the role's home, or allowing the view
//! - **HTTP layer**: axum middleware applying the guard to every dashboard
//!   view, plus a small JSON API for navigation and permissions
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── lectern-core/     # AppError, permission tokens
//! ├── lectern-config/   # env-driven configuration
//! ├── lectern-models/   # Role, Permission, RoutePrefix, Identity
//! ├── lectern-access/   # RoleRegistry, AccessGuard
//! ├── lectern-auth/     # session tokens -> Identity
//! └── lectern-cli/      # administrative CLI
//! src/
//! ├── middleware/       # identity extractors, guard middleware
//! ├── modules/
//! │   ├── views/       # guarded dashboard views, login landing, health
//! │   └── me/          # navigation, permissions, access checks
//! └── ...
//! ```
//!
//! ## Roles
//!
//! | Role | Prefixes | Home |
//! |------|----------|------|
//! | super_admin | every role's prefix | `/super-admin/dashboard` |
//! | admin | `/admin`, `/instructor`, `/student` | `/admin/dashboard` |
//! | instructor | `/instructor` | `/instructor/dashboard` |
//! | student | `/student` | `/student/dashboard` |
//! | parent | `/parent` | `/parent/dashboard` |
//! | auditor | `/auditor` | `/auditor/dashboard` |
//!
//! A prefix only makes a path reachable; the view itself must also be
//! granted to the role.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! LOGIN_ROUTE=/login
//! REGISTRY_PATH=/etc/lectern/roles.json
//! BIND_ADDRESS=0.0.0.0:3000
//! LOG_LEVEL=info
//! LOG_FORMAT=json
//! ```

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use lectern_access;
pub use lectern_auth;
pub use lectern_config;
pub use lectern_core;
pub use lectern_models;
