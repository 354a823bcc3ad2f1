//! Integration tests for health probes, authentication, and role gating.

mod helpers;

use http::StatusCode;
use quisin_entity::user::UserRole;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_liveness_needs_no_database() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/health/ready", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_me_without_token_is_unauthorized() {
    let app = TestApp::offline();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = TestApp::offline();

    for uri in ["/api/auth/me", "/api/admin/tables", "/api/admin/reservations"] {
        let response = app.request("GET", uri, None, Some("not.a.jwt")).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn test_token_from_another_secret_is_unauthorized() {
    let app = TestApp::offline();
    let mut other = helpers::test_config("postgres://localhost/unused");
    other.auth.jwt_secret = "some-other-secret".to_string();
    let forged = quisin_auth::JwtEncoder::new(&other.auth)
        .issue(uuid::Uuid::new_v4(), UserRole::Admin, "admin@example.com")
        .unwrap()
        .token;

    let response = app
        .request("GET", "/api/admin/restaurant", None, Some(&forged))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_admin_roles_are_forbidden_on_admin_routes() {
    let app = TestApp::offline();

    for role in [
        UserRole::Superadmin,
        UserRole::Manager,
        UserRole::Kitchen,
        UserRole::Waiter,
        UserRole::Customer,
    ] {
        let token = app.token_for_role(role);
        let response = app
            .request("GET", "/api/admin/reservations", None, Some(&token))
            .await;

        assert_eq!(response.status, StatusCode::FORBIDDEN, "{role}");
        assert_eq!(response.body["error"], "FORBIDDEN");
    }
}

#[tokio::test]
async fn test_login_rejects_malformed_bodies() {
    let app = TestApp::offline();

    let blank = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "", "password": "" })),
            None,
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.body["error"], "VALIDATION_ERROR");

    let missing = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "a@b.c" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_and_me() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (user_id, email) = app.create_user(UserRole::Waiter).await;

    let token = app.login(&email.to_uppercase(), PASSWORD).await;
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], user_id.to_string());
    assert_eq!(response.body["data"]["email"], email);
    assert_eq!(response.body["data"]["role"], "waiter");
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (_, email) = app.create_user(UserRole::Admin).await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "not-the-password" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "nobody@example.com", "password": PASSWORD })),
            None,
        )
        .await;

    for response in [wrong_password, unknown_email] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "Invalid email or password");
    }
}

#[tokio::test]
async fn test_superadmin_can_only_be_registered_once() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    sqlx::query("DELETE FROM users WHERE role = 'superadmin'")
        .execute(app.db.pool())
        .await
        .unwrap();

    let body = |email: &str| {
        serde_json::json!({
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": email,
            "password": "a-long-enough-password",
        })
    };

    let first = app
        .request(
            "POST",
            "/api/auth/register-superadmin",
            Some(body("Operator@Example.com")),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED, "{}", first.body);
    assert_eq!(first.body["data"]["email"], "operator@example.com");
    assert_eq!(first.body["data"]["role"], "superadmin");

    let second = app
        .request(
            "POST",
            "/api/auth/register-superadmin",
            Some(body("second@example.com")),
            None,
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "A superadmin already exists");

    let token = app.login("operator@example.com", "a-long-enough-password").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
}
