mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{get, json_body, location, setup_test_app, setup_test_app_with};
use lectern::lectern_config::GuardConfig;
use tower::ServiceExt;

#[tokio::test]
async fn test_anonymous_view_redirects_to_login_with_return_path() {
    let app = setup_test_app();

    let response = app.oneshot(get("/student/grades", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?returnTo=%2Fstudent%2Fgrades");
}

#[tokio::test]
async fn test_login_redirect_keeps_query_string() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/student/grades?course=42", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        "/login?returnTo=%2Fstudent%2Fgrades%3Fcourse%3D42"
    );
}

#[tokio::test]
async fn test_query_string_does_not_affect_allowed_view() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/student/grades?course=42", Some("student")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["path"], "/student/grades");
}

#[tokio::test]
async fn test_custom_login_route_is_served_publicly() {
    let app = setup_test_app_with(GuardConfig {
        login_route: "/auth/sign-in".to_string(),
        ..GuardConfig::default()
    });

    let response = app
        .clone()
        .oneshot(get("/student/grades", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let next = location(&response).to_string();
    assert_eq!(next, "/auth/sign-in?returnTo=%2Fstudent%2Fgrades");

    let response = app.clone().oneshot(get(&next, None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["return_to"], "/student/grades");

    let response = app.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/auth/sign-in");
}

#[tokio::test]
async fn test_dashboard_subtree_renders_for_owner() {
    let app = setup_test_app();

    let response = app
        .clone()
        .oneshot(get("/admin/dashboard/settings", Some("admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/admin/dashboard/settings", Some("student")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/student/dashboard");
}

#[tokio::test]
async fn test_invalid_token_is_treated_as_anonymous() {
    let app = setup_test_app();
    let request = Request::builder()
        .uri("/admin/dashboard")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login?returnTo=%2Fadmin%2Fdashboard");
}

#[tokio::test]
async fn test_student_is_sent_home_from_admin_dashboard() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/admin/dashboard", Some("student")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/student/dashboard");
}

#[tokio::test]
async fn test_admin_is_sent_home_from_student_view_inside_its_prefixes() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/student/dashboard", Some("admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/dashboard");
}

#[tokio::test]
async fn test_unknown_role_is_sent_to_safe_root() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/super-admin/dashboard", Some("SUPER_ADMIN")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_ungranted_path_under_own_prefix_is_not_rendered() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/instructor/nonexistent", Some("instructor")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/instructor/dashboard");
}

#[tokio::test]
async fn test_allowed_view_renders_dashboard_descriptor() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/admin/dashboard", Some("admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["path"], "/admin/dashboard");
    assert_eq!(body["role"], "admin");
    assert_eq!(body["dashboard"], "admin");
    assert_eq!(body["navigation"][0]["href"], "/admin/dashboard");
    assert_eq!(body["navigation"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_view_outside_navigation_is_rendered_when_granted() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/super-admin/reports", Some("super_admin")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["dashboard"], "super_admin");
}

#[tokio::test]
async fn test_root_redirects_to_login() {
    let app = setup_test_app();

    let response = app.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_prompt_echoes_return_path() {
    let app = setup_test_app();

    let response = app
        .oneshot(get("/login?returnTo=%2Fparent%2Fmessages", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["return_to"], "/parent/messages");
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app.oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["roles"], 6);
}
