//! Integration tests for restaurant onboarding.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

use helpers::{PASSWORD, TestApp};
use quisin_auth::PasswordHasher;
use quisin_core::error::ErrorKind;
use quisin_database::repositories::{RestaurantRepository, UserRepository};
use quisin_entity::user::{CreateUser, UserRole};

fn new_admin(email: &str) -> CreateUser {
    CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Owner".to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: PasswordHasher::new().hash_password(PASSWORD).expect("hash"),
        role: UserRole::Admin,
    }
}

fn unique_email() -> String {
    format!("owner-{}@example.com", Uuid::new_v4().simple())
}

async fn restaurants_named(app: &TestApp, name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM restaurants WHERE name = $1")
        .bind(name)
        .fetch_one(app.db.pool())
        .await
        .expect("count restaurants")
}

#[tokio::test]
async fn test_onboarded_admin_manages_new_restaurant() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let email = unique_email();
    let name = format!("Bistro {}", Uuid::new_v4().simple());

    let (restaurant, admin) = RestaurantRepository::new(app.db.pool().clone())
        .create_with_admin(&name, &new_admin(&email))
        .await
        .expect("onboarding succeeds");
    assert_eq!(admin.role, UserRole::Admin);

    let token = app.login(&email, PASSWORD).await;
    let response = app
        .request("GET", "/api/admin/restaurant", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["data"]["id"], restaurant.id.to_string());
    assert_eq!(response.body["data"]["name"], name);
}

#[tokio::test]
async fn test_failed_onboarding_leaves_no_admin_account() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let email = unique_email();

    // PostgreSQL rejects NUL in text, so the restaurant insert fails after
    // the account insert has already run.
    let err = RestaurantRepository::new(app.db.pool().clone())
        .create_with_admin("Bistro\0", &new_admin(&email))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Database);

    let user = UserRepository::new(app.db.pool().clone())
        .find_by_email(&email)
        .await
        .expect("lookup");
    assert!(user.is_none(), "admin account survived a failed onboarding");

    // The same email can be onboarded again.
    let name = format!("Bistro {}", Uuid::new_v4().simple());
    RestaurantRepository::new(app.db.pool().clone())
        .create_with_admin(&name, &new_admin(&email))
        .await
        .expect("retry succeeds");
}

#[tokio::test]
async fn test_duplicate_admin_email_leaves_no_restaurant() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (_, email) = app.create_user(UserRole::Customer).await;
    let name = format!("Bistro {}", Uuid::new_v4().simple());

    let err = RestaurantRepository::new(app.db.pool().clone())
        .create_with_admin(&name, &new_admin(&email))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(restaurants_named(&app, &name).await, 0);
}
