//! Access guard configuration.
//!
//! # Environment Variables
//!
//! - `LOGIN_ROUTE`: Where unauthenticated navigations are sent (default: `/login`)
//! - `REGISTRY_PATH`: JSON role registry file; the built-in LMS table is used when unset
//! - `BIND_ADDRESS`: Socket address for the HTTP server (default: `0.0.0.0:3000`)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// Route that receives unauthenticated navigations.
    pub login_route: String,
    /// Optional registry file overriding the built-in table.
    pub registry_path: Option<PathBuf>,
    pub bind_address: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            registry_path: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

impl GuardConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            // A login route that is not an absolute path would loop through the guard.
            login_route: lookup("LOGIN_ROUTE")
                .map(|v| v.trim().to_string())
                .filter(|v| v.starts_with('/'))
                .unwrap_or(defaults.login_route),
            registry_path: lookup("REGISTRY_PATH")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            bind_address: lookup("BIND_ADDRESS")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.bind_address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GuardConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, GuardConfig::default());
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert!(config.registry_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = GuardConfig::from_lookup(lookup_from(&[
            ("LOGIN_ROUTE", "/auth/sign-in"),
            ("REGISTRY_PATH", "/etc/lectern/roles.json"),
            ("BIND_ADDRESS", "127.0.0.1:8080"),
        ]));
        assert_eq!(config.login_route, "/auth/sign-in");
        assert_eq!(
            config.registry_path,
            Some(PathBuf::from("/etc/lectern/roles.json"))
        );
        assert_eq!(config.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn test_relative_login_route_is_ignored() {
        let config = GuardConfig::from_lookup(lookup_from(&[("LOGIN_ROUTE", "login")]));
        assert_eq!(config.login_route, "/login");
    }

    #[test]
    fn test_blank_registry_path_is_ignored() {
        let config = GuardConfig::from_lookup(lookup_from(&[("REGISTRY_PATH", "  ")]));
        assert!(config.registry_path.is_none());
    }
}
