//! Integration tests for the table registry endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_table_endpoints_require_token() {
    let app = TestApp::offline();

    let response = app
        .request(
            "POST",
            "/api/admin/tables",
            Some(json!({ "table_number": 1, "seating_capacity": 4 })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_without_restaurant_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let (_, email) = app.create_user(quisin_entity::user::UserRole::Admin).await;
    let token = app.login(&email, helpers::PASSWORD).await;

    let response = app
        .request("GET", "/api/admin/tables", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Restaurant not found for this admin");
}

#[tokio::test]
async fn test_create_and_list_tables() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let restaurant = app.create_restaurant().await;

    let created = app
        .request(
            "POST",
            "/api/admin/tables",
            Some(json!({
                "table_number": 7,
                "seating_capacity": 6,
                "location_description": "Terrace",
            })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["status"], "active");
    assert_eq!(created.body["data"]["restaurant_id"], restaurant.id.to_string());

    app.create_table(&restaurant, 2, 2).await;

    let listed = app
        .request("GET", "/api/admin/tables", None, Some(&restaurant.admin_token))
        .await;
    assert_eq!(listed.status, StatusCode::OK);

    let tables = listed.body["data"].as_array().unwrap();
    let numbers: Vec<i64> = tables
        .iter()
        .map(|t| t["table_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 7]);
    assert!(tables.iter().all(|t| t["active_reservations"] == 0));
}

#[tokio::test]
async fn test_duplicate_table_number_conflicts() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let restaurant = app.create_restaurant().await;
    app.create_table(&restaurant, 1, 4).await;
    let second = app.create_table(&restaurant, 2, 4).await;

    let duplicate = app
        .request(
            "POST",
            "/api/admin/tables",
            Some(json!({ "table_number": 1, "seating_capacity": 2 })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["message"], "Table number already exists");

    let renumber = app
        .request(
            "PUT",
            &format!("/api/admin/tables/{second}"),
            Some(json!({ "table_number": 1, "seating_capacity": 4 })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(renumber.status, StatusCode::CONFLICT);

    // Numbers are only unique per restaurant.
    let other = app.create_restaurant().await;
    app.create_table(&other, 1, 4).await;
}

#[tokio::test]
async fn test_update_and_retire_table() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let restaurant = app.create_restaurant().await;
    let table_id = app.create_table(&restaurant, 3, 4).await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/tables/{table_id}"),
            Some(json!({
                "table_number": 30,
                "seating_capacity": 8,
                "location_description": "Window",
            })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["table_number"], 30);
    assert_eq!(updated.body["data"]["seating_capacity"], 8);

    let retired = app
        .request(
            "PUT",
            &format!("/api/admin/tables/{table_id}/status"),
            Some(json!({ "status": "maintenance" })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(retired.status, StatusCode::OK);
    assert_eq!(retired.body["data"]["status"], "maintenance");

    let fetched = app
        .request(
            "GET",
            &format!("/api/admin/tables/{table_id}"),
            None,
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["status"], "maintenance");
}

#[tokio::test]
async fn test_invalid_tables_are_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let restaurant = app.create_restaurant().await;

    let zero_capacity = app
        .request(
            "POST",
            "/api/admin/tables",
            Some(json!({ "table_number": 1, "seating_capacity": 0 })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(zero_capacity.status, StatusCode::BAD_REQUEST);
    assert_eq!(zero_capacity.body["error"], "VALIDATION_ERROR");

    let bad_status = app
        .request(
            "POST",
            "/api/admin/tables",
            Some(json!({ "table_number": 1, "seating_capacity": 2, "status": "broken" })),
            Some(&restaurant.admin_token),
        )
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tables_of_other_restaurants_are_invisible() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let owner = app.create_restaurant().await;
    let table_id = app.create_table(&owner, 1, 4).await;
    let stranger = app.create_restaurant().await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/tables/{table_id}"),
            None,
            Some(&stranger.admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Table not found");

    let update = app
        .request(
            "PUT",
            &format!("/api/admin/tables/{table_id}/status"),
            Some(json!({ "status": "inactive" })),
            Some(&stranger.admin_token),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}
