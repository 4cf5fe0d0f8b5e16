//! The role registry.
//!
//! One entry per role holds everything the guard and the navigation layer
//! need: permissions, coarse route prefixes, explicit view grants, the home
//! route, sidebar entries and the dashboard kind. The registry is validated
//! once at construction and is read-only afterwards.
//!
//! Lookups take the raw role string carried by an identity. A role outside
//! the closed set never fails a lookup; it resolves to empty sets and the
//! safe root.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use lectern_models::{Dashboard, NavigationItem, Permission, Role, RoutePrefix};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::defaults;
use crate::error::RegistryError;

/// Home route for roles the registry does not know.
pub const SAFE_ROOT: &str = "/";

/// Suffix marking a view that grants its whole subtree.
pub const SUBTREE_SUFFIX: &str = "/*";

/// Whether `view` grants `path`.
///
/// A plain view grants exactly its own path. A view ending in `/*` grants
/// its base path and every path beneath it.
pub fn view_matches(view: &str, path: &str) -> bool {
    match view.strip_suffix(SUBTREE_SUFFIX) {
        Some(base) => {
            path == base
                || path
                    .strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
        None => view == path,
    }
}

fn view_base(view: &str) -> &str {
    view.strip_suffix(SUBTREE_SUFFIX).unwrap_or(view)
}

/// Access configuration of a single role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    pub prefixes: Vec<RoutePrefix>,
    /// Views this role may open; the per-view allow-lists are derived from these.
    /// A trailing `/*` grants the whole subtree.
    pub views: Vec<String>,
    pub home: String,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(default)]
    pub dashboard: Option<Dashboard>,
}

impl RoleEntry {
    pub fn permits_route(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| prefix.matches(path))
    }

    pub fn grants_view(&self, path: &str) -> bool {
        self.views.iter().any(|view| view_matches(view, path))
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let role = self.role;

        if self.prefixes.is_empty() {
            return Err(RegistryError::NoPrefixes(role));
        }

        for prefix in &self.prefixes {
            if !prefix.as_str().starts_with('/') {
                return Err(RegistryError::InvalidPrefix {
                    role,
                    prefix: prefix.to_string(),
                });
            }
        }

        for (i, first) in self.prefixes.iter().enumerate() {
            for second in &self.prefixes[i + 1..] {
                if first.overlaps(second) {
                    return Err(RegistryError::OverlappingPrefixes {
                        role,
                        first: first.to_string(),
                        second: second.to_string(),
                    });
                }
            }
        }

        if !self.grants_view(&self.home) {
            return Err(RegistryError::HomeNotGranted {
                role,
                home: self.home.clone(),
            });
        }

        if let Some(view) = self
            .views
            .iter()
            .find(|view| !self.permits_route(view_base(view)))
        {
            return Err(RegistryError::ViewOutsidePrefixes {
                role,
                view: view.clone(),
            });
        }

        if let Some(item) = self
            .navigation
            .iter()
            .find(|item| !self.grants_view(&item.href))
        {
            return Err(RegistryError::NavigationNotGranted {
                role,
                href: item.href.clone(),
            });
        }

        Ok(())
    }

    fn normalize(mut self) -> Self {
        self.permissions.sort();
        self.permissions.dedup();
        self.views.sort();
        self.views.dedup();
        self
    }
}

/// On-disk registry format: `{"roles": [RoleEntry, ...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    pub roles: Vec<RoleEntry>,
}

#[derive(Debug, Clone)]
pub struct RoleRegistry {
    entries: BTreeMap<Role, RoleEntry>,
}

impl RoleRegistry {
    /// Builds a registry, rejecting any configuration that breaks an invariant.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] when a role is missing or duplicated, or
    /// when an entry's prefixes, home route, views or navigation disagree.
    pub fn new(entries: impl IntoIterator<Item = RoleEntry>) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();

        for entry in entries {
            entry.validate()?;
            let role = entry.role;
            if map.insert(role, entry.normalize()).is_some() {
                return Err(RegistryError::DuplicateRole(role));
            }
        }

        if let Some(missing) = Role::ALL.into_iter().find(|role| !map.contains_key(role)) {
            return Err(RegistryError::MissingRole(missing));
        }

        debug!(roles = map.len(), "role registry built");

        Ok(Self { entries: map })
    }

    /// The built-in LMS table.
    pub fn lms_default() -> Self {
        debug_assert!(RoleRegistry::new(defaults::lms_entries()).is_ok());

        let entries = defaults::lms_entries()
            .into_iter()
            .map(|entry| (entry.role, entry.normalize()))
            .collect();

        Self { entries }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(raw)?;
        Self::new(file.roles)
    }

    pub fn from_path(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn to_file(&self) -> RegistryFile {
        RegistryFile {
            roles: self.entries.values().cloned().collect(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &RoleEntry> {
        self.entries.values()
    }

    /// Entry for a raw role string, `None` when the role is not recognised.
    pub fn entry(&self, role: &str) -> Option<&RoleEntry> {
        role.parse::<Role>()
            .ok()
            .and_then(|role| self.entries.get(&role))
    }

    pub fn permissions_for(&self, role: &str) -> &[Permission] {
        self.entry(role)
            .map(|entry| entry.permissions.as_slice())
            .unwrap_or(&[])
    }

    pub fn allowed_prefixes_for(&self, role: &str) -> &[RoutePrefix] {
        self.entry(role)
            .map(|entry| entry.prefixes.as_slice())
            .unwrap_or(&[])
    }

    pub fn home_route_for(&self, role: &str) -> &str {
        self.entry(role)
            .map(|entry| entry.home.as_str())
            .unwrap_or(SAFE_ROOT)
    }

    pub fn has_permission(&self, role: &str, permission: &str) -> bool {
        self.permissions_for(role)
            .iter()
            .any(|granted| granted.as_str() == permission)
    }

    pub fn can_access_route(&self, role: &str, path: &str) -> bool {
        self.entry(role)
            .is_some_and(|entry| entry.permits_route(path))
    }

    pub fn navigation_for(&self, role: &str) -> &[NavigationItem] {
        self.entry(role)
            .map(|entry| entry.navigation.as_slice())
            .unwrap_or(&[])
    }

    pub fn dashboard_for(&self, role: &str) -> Option<Dashboard> {
        self.entry(role)
            .map(|entry| entry.dashboard.unwrap_or(Dashboard::from(entry.role)))
    }

    /// Roles explicitly granted the view at `path`.
    pub fn roles_for_view(&self, path: &str) -> BTreeSet<Role> {
        self.entries
            .values()
            .filter(|entry| entry.grants_view(path))
            .map(|entry| entry.role)
            .collect()
    }

    /// Every view granted to at least one role, subtree views included as written.
    pub fn views(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flat_map(|entry| entry.views.iter().map(String::as_str))
            .collect()
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::lms_default()
    }
}
