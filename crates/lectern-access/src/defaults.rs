//! The built-in LMS role table.
//!
//! Every role owns the `/<slug>` prefix and lands on `/<slug>/dashboard`,
//! whose whole subtree it may open.
//! Administrative roles additionally hold the prefixes of the roles they
//! supervise, but may only open views granted to them explicitly.

use lectern_core::permissions;
use lectern_models::{Dashboard, Icon, NavigationItem, Permission, Role, RoutePrefix};

use crate::registry::{RoleEntry, SUBTREE_SUFFIX};

pub fn lms_entries() -> Vec<RoleEntry> {
    Role::ALL.into_iter().map(lms_entry).collect()
}

pub fn lms_entry(role: Role) -> RoleEntry {
    match role {
        Role::SuperAdmin => build(
            role,
            &[
                permissions::MANAGE_USERS,
                permissions::MANAGE_ROLES,
                permissions::MANAGE_COURSES,
                permissions::MANAGE_SYSTEM,
                permissions::VIEW_ANALYTICS,
                permissions::MANAGE_CONTENT,
                permissions::MANAGE_SETTINGS,
                permissions::VIEW_ALL_DATA,
            ],
            &[
                "/super-admin",
                "/admin",
                "/instructor",
                "/student",
                "/parent",
                "/auditor",
            ],
            vec![
                nav("Dashboard", "/super-admin/dashboard", Icon::Home),
                nav("Users", "/super-admin/users", Icon::Users),
                nav("System Settings", "/super-admin/settings", Icon::Settings),
                nav("Analytics", "/super-admin/analytics", Icon::BarChart),
            ],
            &["/super-admin/reports"],
        ),
        Role::Admin => build(
            role,
            &[
                permissions::MANAGE_USERS,
                permissions::MANAGE_COURSES,
                permissions::VIEW_ANALYTICS,
                permissions::MANAGE_CONTENT,
                permissions::MANAGE_SETTINGS,
            ],
            &["/admin", "/instructor", "/student"],
            vec![
                nav("Dashboard", "/admin/dashboard", Icon::Home),
                nav("Courses", "/admin/courses", Icon::Book),
                nav("Users", "/admin/users", Icon::Users),
                nav("Reports", "/admin/reports", Icon::FileText),
            ],
            &[],
        ),
        Role::Instructor => build(
            role,
            &[
                permissions::MANAGE_COURSES,
                permissions::VIEW_COURSE_ANALYTICS,
                permissions::MANAGE_ASSIGNMENTS,
                permissions::GRADE_STUDENTS,
                permissions::COMMUNICATE_STUDENTS,
            ],
            &["/instructor"],
            vec![
                nav("Dashboard", "/instructor/dashboard", Icon::Home),
                nav("My Courses", "/instructor/courses", Icon::Book),
                nav("Assignments", "/instructor/assignments", Icon::FileText),
                nav("Students", "/instructor/students", Icon::Users),
            ],
            &[
                "/instructor/announcements",
                "/instructor/gradebook",
                "/instructor/messages",
                "/instructor/settings",
            ],
        ),
        Role::Student => build(
            role,
            &[
                permissions::VIEW_COURSES,
                permissions::SUBMIT_ASSIGNMENTS,
                permissions::VIEW_GRADES,
                permissions::COMMUNICATE_INSTRUCTORS,
                permissions::JOIN_STUDY_GROUPS,
            ],
            &["/student"],
            vec![
                nav("Dashboard", "/student/dashboard", Icon::Home),
                nav("My Courses", "/student/courses", Icon::Book),
                nav("Assignments", "/student/assignments", Icon::FileText),
                nav("Grades", "/student/grades", Icon::Award),
            ],
            &[],
        ),
        Role::Parent => build(
            role,
            &[
                permissions::VIEW_CHILD_PROGRESS,
                permissions::VIEW_CHILD_GRADES,
                permissions::COMMUNICATE_INSTRUCTORS,
                permissions::VIEW_ANNOUNCEMENTS,
            ],
            &["/parent"],
            vec![
                nav("Dashboard", "/parent/dashboard", Icon::Home),
                nav("Child Progress", "/parent/progress", Icon::TrendingUp),
                nav("Messages", "/parent/messages", Icon::Mail),
            ],
            &[],
        ),
        Role::Auditor => build(
            role,
            &[
                permissions::VIEW_COURSE_CONTENT,
                permissions::VIEW_SYSTEM_ANALYTICS,
                permissions::GENERATE_REPORTS,
            ],
            &["/auditor"],
            vec![
                nav("Dashboard", "/auditor/dashboard", Icon::Home),
                nav("Reports", "/auditor/reports", Icon::FileText),
                nav("Analytics", "/auditor/analytics", Icon::BarChart),
            ],
            &[],
        ),
    }
}

fn nav(name: &str, href: &str, icon: Icon) -> NavigationItem {
    NavigationItem::new(name, href, icon)
}

fn build(
    role: Role,
    grants: &[&str],
    prefixes: &[&str],
    navigation: Vec<NavigationItem>,
    extra_views: &[&str],
) -> RoleEntry {
    let home = format!("/{}/dashboard", role.route_slug());
    let views = navigation
        .iter()
        .map(|item| item.href.clone())
        .chain(extra_views.iter().map(|view| view.to_string()))
        .chain([format!("{}{}", home, SUBTREE_SUFFIX)])
        .collect();

    RoleEntry {
        role,
        permissions: grants.iter().map(|p| Permission::from(*p)).collect(),
        prefixes: prefixes.iter().map(|p| RoutePrefix::from(*p)).collect(),
        views,
        home,
        navigation,
        dashboard: Some(Dashboard::from(role)),
    }
}
