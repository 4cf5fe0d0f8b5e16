//! Navigation entries and dashboard kinds.
//!
//! Icons and dashboards are closed enums; the presentation layer maps each
//! variant to its own component.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::roles::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Users,
    Settings,
    BarChart,
    Book,
    FileText,
    Award,
    TrendingUp,
    Mail,
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationItem {
    pub name: String,
    pub href: String,
    pub icon: Icon,
}

impl NavigationItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>, icon: Icon) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon,
        }
    }
}

/// The dashboard a role lands on after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Dashboard {
    SuperAdmin,
    Admin,
    Instructor,
    Student,
    Parent,
    Auditor,
}

impl From<Role> for Dashboard {
    fn from(role: Role) -> Self {
        match role {
            Role::SuperAdmin => Dashboard::SuperAdmin,
            Role::Admin => Dashboard::Admin,
            Role::Instructor => Dashboard::Instructor,
            Role::Student => Dashboard::Student,
            Role::Parent => Dashboard::Parent,
            Role::Auditor => Dashboard::Auditor,
        }
    }
}
