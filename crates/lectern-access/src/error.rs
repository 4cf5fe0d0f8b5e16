use std::path::PathBuf;

use lectern_models::Role;
use thiserror::Error;

/// A role registry that violates one of its configuration invariants.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("role {0} is not configured")]
    MissingRole(Role),

    #[error("role {0} is configured more than once")]
    DuplicateRole(Role),

    #[error("role {0} has no allowed route prefixes")]
    NoPrefixes(Role),

    #[error("route prefix {prefix:?} of role {role} must start with '/'")]
    InvalidPrefix { role: Role, prefix: String },

    #[error("route prefixes {first:?} and {second:?} of role {role} overlap")]
    OverlappingPrefixes {
        role: Role,
        first: String,
        second: String,
    },

    #[error("home route {home:?} of role {role} is not one of its views")]
    HomeNotGranted { role: Role, home: String },

    #[error("view {view:?} of role {role} is outside its route prefixes")]
    ViewOutsidePrefixes { role: Role, view: String },

    #[error("navigation entry {href:?} of role {role} is not one of its views")]
    NavigationNotGranted { role: Role, href: String },

    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),
}
