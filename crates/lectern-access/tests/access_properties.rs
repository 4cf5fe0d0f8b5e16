use std::sync::Arc;

use lectern_access::{AccessDecision, AccessGuard, DenyReason, RoleRegistry, SAFE_ROOT};
use lectern_models::{Identity, Role, UserId};

fn create_test_guard() -> AccessGuard {
    AccessGuard::new(Arc::new(RoleRegistry::lms_default()))
}

fn create_test_identity(role: &str) -> Identity {
    Identity::with_raw_role(
        UserId::from_u128(0x1234),
        "Test User",
        "test@example.com",
        role,
    )
}

#[test]
fn test_every_role_has_prefixes_and_a_reachable_home() {
    let registry = RoleRegistry::lms_default();

    for role in Role::ALL {
        let name = role.as_str();
        assert!(!registry.allowed_prefixes_for(name).is_empty());

        let home = registry.home_route_for(name);
        assert!(registry.can_access_route(name, home), "{name} home {home}");
        assert!(registry.roles_for_view(home).contains(&role));
    }
}

#[test]
fn test_view_grants_never_contradict_prefixes() {
    let registry = RoleRegistry::lms_default();

    for view in registry.views() {
        for role in registry.roles_for_view(view) {
            assert!(
                registry.can_access_route(role.as_str(), view),
                "{role} granted {view} outside its prefixes"
            );
        }
    }
}

#[test]
fn test_anonymous_always_redirects_to_login() {
    let guard = create_test_guard();

    for path in ["/", "/student/dashboard", "/admin/users", "/x", ""] {
        assert_eq!(
            guard.decide(None, path, &Role::ALL),
            AccessDecision::RedirectToLogin {
                login: "/login".to_string(),
                return_to: path.to_string(),
            }
        );
    }
}

#[test]
fn test_student_cannot_reach_admin_dashboard() {
    let guard = create_test_guard();
    let student = create_test_identity("student");

    for path in ["/admin-dashboard", "/admin/dashboard"] {
        let decision = guard.decide(Some(&student), path, &[Role::Admin]);
        assert_eq!(
            decision,
            AccessDecision::RedirectToHome {
                target: "/student/dashboard".to_string(),
                reason: DenyReason::OutsidePrefixes,
            }
        );
    }
}

#[test]
fn test_admin_reaches_admin_dashboard() {
    let guard = create_test_guard();
    let admin = create_test_identity("admin");

    assert_eq!(
        guard.decide(Some(&admin), "/admin/dashboard", &[Role::Admin]),
        AccessDecision::Allow
    );
    assert!(guard.decide_for_view(Some(&admin), "/admin/dashboard").is_allowed());
}

#[test]
fn test_prefix_alone_is_not_enough() {
    let guard = create_test_guard();
    let admin = create_test_identity("admin");

    // "/student" is an admin prefix, but the view is granted to students only.
    assert_eq!(
        guard.decide_for_view(Some(&admin), "/student/dashboard"),
        AccessDecision::RedirectToHome {
            target: "/admin/dashboard".to_string(),
            reason: DenyReason::NotInViewAllowList,
        }
    );
}

#[test]
fn test_unknown_role_fails_closed_to_safe_root() {
    let guard = create_test_guard();

    for raw in ["janitor", "SUPER_ADMIN", "superadmin", "super-admin", ""] {
        let identity = create_test_identity(raw);
        for path in ["/x", "/", "/super-admin/dashboard"] {
            assert_eq!(
                guard.decide(Some(&identity), path, &Role::ALL),
                AccessDecision::RedirectToHome {
                    target: SAFE_ROOT.to_string(),
                    reason: DenyReason::UnknownRole,
                }
            );
        }
    }
}

#[test]
fn test_empty_allow_list_denies_everyone() {
    let guard = create_test_guard();

    for role in Role::ALL {
        let identity = create_test_identity(role.as_str());
        let home = guard.registry().home_route_for(role.as_str()).to_string();
        assert!(!guard.decide(Some(&identity), &home, &[]).is_allowed());
    }
}

#[test]
fn test_every_role_reaches_its_own_navigation() {
    let guard = create_test_guard();

    for role in Role::ALL {
        let identity = create_test_identity(role.as_str());
        for item in guard.registry().navigation_for(role.as_str()) {
            assert!(
                guard.decide_for_view(Some(&identity), &item.href).is_allowed(),
                "{role} denied {}",
                item.href
            );
        }
    }
}

#[test]
fn test_prefix_matching_is_case_sensitive() {
    let guard = create_test_guard();
    let student = create_test_identity("student");

    assert!(matches!(
        guard.decide(Some(&student), "/Student/dashboard", &[Role::Student]),
        AccessDecision::RedirectToHome {
            reason: DenyReason::OutsidePrefixes,
            ..
        }
    ));
}

#[test]
fn test_decisions_are_idempotent() {
    let guard = create_test_guard();
    let identities = [
        None,
        Some(create_test_identity("instructor")),
        Some(create_test_identity("nobody")),
    ];

    for identity in &identities {
        for path in ["/instructor/courses", "/admin/users", "/"] {
            let first = guard.decide(identity.as_ref(), path, &[Role::Instructor]);
            let second = guard.decide(identity.as_ref(), path, &[Role::Instructor]);
            assert_eq!(first, second);
        }
    }
    assert_eq!(identities[1].as_ref().unwrap().role, "instructor");
}
