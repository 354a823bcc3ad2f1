//! Integration tests for reservation booking and the admission check.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use quisin_entity::user::UserRole;

use helpers::{Restaurant, TestApp};

struct Floor {
    restaurant: Restaurant,
    table_id: Uuid,
    customer_id: Uuid,
}

async fn floor(app: &TestApp, capacity: i32) -> Floor {
    let restaurant = app.create_restaurant().await;
    let table_id = app.create_table(&restaurant, 1, capacity).await;
    let (customer_id, _) = app.create_user(UserRole::Customer).await;
    Floor {
        restaurant,
        table_id,
        customer_id,
    }
}

fn booking(floor: &Floor, at: &str, guests: i32) -> Value {
    json!({
        "customer_id": floor.customer_id,
        "table_id": floor.table_id,
        "reservation_date": at,
        "number_of_guests": guests,
    })
}

async fn book(app: &TestApp, floor: &Floor, at: &str, guests: i32) -> helpers::TestResponse {
    app.request(
        "POST",
        "/api/admin/reservations",
        Some(booking(floor, at, guests)),
        Some(&floor.restaurant.admin_token),
    )
    .await
}

fn id_of(response: &helpers::TestResponse) -> String {
    response.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_reservation_endpoints_require_token() {
    let app = TestApp::offline();

    let response = app
        .request(
            "POST",
            "/api/admin/reservations/admission",
            Some(json!({})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_booking_and_slot_conflict() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;

    let first = book(&app, &floor, "2030-06-01T19:00:00Z", 2).await;
    assert_eq!(first.status, StatusCode::CREATED, "{}", first.body);
    assert_eq!(first.body["data"]["status"], "confirmed");

    let overlapping = book(&app, &floor, "2030-06-01T20:30:00Z", 2).await;
    assert_eq!(overlapping.status, StatusCode::BAD_REQUEST);
    assert_eq!(overlapping.body["error"], "BUSINESS_RULE");
    assert_eq!(
        overlapping.body["message"],
        "Table is already reserved for this time slot"
    );
    assert_eq!(overlapping.body["details"]["reason"], "SLOT_CONFLICT");

    // Exactly two hours later still touches the window.
    let boundary = book(&app, &floor, "2030-06-01T21:00:00Z", 2).await;
    assert_eq!(boundary.status, StatusCode::BAD_REQUEST);

    let later = book(&app, &floor, "2030-06-01T21:00:01Z", 2).await;
    assert_eq!(later.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_capacity_and_unknown_table() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;

    let too_many = book(&app, &floor, "2030-06-02T12:00:00Z", 6).await;
    assert_eq!(too_many.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        too_many.body["message"],
        "Table capacity (4) is less than requested guests (6)"
    );
    assert_eq!(too_many.body["details"]["reason"], "CAPACITY_EXCEEDED");

    let mut unknown = booking(&floor, "2030-06-02T12:00:00Z", 2);
    unknown["table_id"] = json!(Uuid::new_v4());
    let missing = app
        .request(
            "POST",
            "/api/admin/reservations",
            Some(unknown),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Table not found");

    let mut stranger = booking(&floor, "2030-06-02T12:00:00Z", 2);
    stranger["customer_id"] = json!(Uuid::new_v4());
    let no_customer = app
        .request(
            "POST",
            "/api/admin/reservations",
            Some(stranger),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(no_customer.status, StatusCode::NOT_FOUND);
    assert_eq!(no_customer.body["message"], "Customer not found");
}

#[tokio::test]
async fn test_admission_endpoint_returns_decision() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;
    let existing = book(&app, &floor, "2030-06-03T19:00:00Z", 2).await;
    let existing_id = id_of(&existing);

    let check = |at: &str, guests: i32, exclude: Option<&str>| {
        json!({
            "table_id": floor.table_id,
            "reservation_date": at,
            "number_of_guests": guests,
            "exclude_reservation_id": exclude,
        })
    };

    let conflict = app
        .request(
            "POST",
            "/api/admin/reservations/admission",
            Some(check("2030-06-03T18:00:00Z", 2, None)),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(conflict.status, StatusCode::OK);
    assert_eq!(conflict.body["decision"], "REJECT");
    assert_eq!(conflict.body["reason"], "SLOT_CONFLICT");
    assert_eq!(
        conflict.body["details"]["conflicting_reservation_ids"][0],
        existing_id
    );

    let own_slot = app
        .request(
            "POST",
            "/api/admin/reservations/admission",
            Some(check("2030-06-03T18:00:00Z", 2, Some(&existing_id))),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(own_slot.status, StatusCode::OK);
    assert_eq!(own_slot.body, json!({ "decision": "ADMIT" }));

    let capacity = app
        .request(
            "POST",
            "/api/admin/reservations/admission",
            Some(check("2030-06-04T12:00:00Z", 5, None)),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(capacity.body["reason"], "CAPACITY_EXCEEDED");
    assert_eq!(capacity.body["details"]["capacity"], 4);
    assert_eq!(capacity.body["details"]["requested"], 5);

    // The dry run wrote nothing.
    let listed = app
        .request(
            "GET",
            "/api/admin/reservations",
            None,
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(listed.body["data"]["total_items"], 1);
}

#[tokio::test]
async fn test_update_excludes_itself() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 6).await;
    let created = book(&app, &floor, "2030-06-05T19:00:00Z", 2).await;
    let id = id_of(&created);

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/reservations/{id}"),
            Some(json!({
                "table_id": floor.table_id,
                "reservation_date": "2030-06-05T19:30:00Z",
                "number_of_guests": 5,
                "special_requests": "Birthday",
                "status": "confirmed",
            })),
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK, "{}", updated.body);
    assert_eq!(updated.body["data"]["number_of_guests"], 5);

    let detail = app
        .request(
            "GET",
            &format!("/api/admin/reservations/{id}"),
            None,
            Some(&floor.restaurant.admin_token),
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["data"]["special_requests"], "Birthday");
    assert_eq!(detail.body["data"]["table_number"], 1);
}

#[tokio::test]
async fn test_cancel_frees_slot_and_reactivation_is_checked() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;
    let first = id_of(&book(&app, &floor, "2030-06-06T19:00:00Z", 2).await);

    let set_status = |id: String, status: &'static str| {
        let token = floor.restaurant.admin_token.clone();
        let app = &app;
        async move {
            app.request(
                "PUT",
                &format!("/api/admin/reservations/{id}/status"),
                Some(json!({ "status": status })),
                Some(&token),
            )
            .await
        }
    };

    let cancelled = set_status(first.clone(), "cancelled").await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["data"]["status"], "cancelled");

    let replacement = book(&app, &floor, "2030-06-06T19:30:00Z", 2).await;
    assert_eq!(replacement.status, StatusCode::CREATED);

    let reactivated = set_status(first, "confirmed").await;
    assert_eq!(reactivated.status, StatusCode::BAD_REQUEST);
    assert_eq!(reactivated.body["details"]["reason"], "SLOT_CONFLICT");

    let arrived = set_status(id_of(&replacement), "arrived").await;
    assert_eq!(arrived.status, StatusCode::OK);

    let unknown = set_status(Uuid::new_v4().to_string(), "completed").await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.body["message"], "Reservation not found");
}

#[tokio::test]
async fn test_list_filters_and_pagination() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;
    for day in 10..13 {
        let at = format!("2030-06-{day}T19:00:00Z");
        assert_eq!(book(&app, &floor, &at, 2).await.status, StatusCode::CREATED);
    }

    let token = Some(floor.restaurant.admin_token.as_str());

    let page = app
        .request("GET", "/api/admin/reservations?page=1&per_page=2", None, token)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["data"]["total_items"], 3);
    assert_eq!(page.body["data"]["total_pages"], 2);
    let items = page.body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["reservation_date"], "2030-06-12T19:00:00Z");
    assert_eq!(items[0]["customer_name"], "Test customer");

    let by_date = app
        .request("GET", "/api/admin/reservations?date=2030-06-11", None, token)
        .await;
    assert_eq!(by_date.body["data"]["total_items"], 1);

    let by_search = app
        .request("GET", "/api/admin/reservations?search=CUSTOMER", None, token)
        .await;
    assert_eq!(by_search.body["data"]["total_items"], 3);

    let no_match = app
        .request("GET", "/api/admin/reservations?search=%25", None, token)
        .await;
    assert_eq!(no_match.body["data"]["total_items"], 0);

    let cancelled = app
        .request("GET", "/api/admin/reservations?status=cancelled", None, token)
        .await;
    assert_eq!(cancelled.body["data"]["total_items"], 0);

    let bad_status = app
        .request("GET", "/api/admin/reservations?status=seated", None, token)
        .await;
    assert_eq!(bad_status.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_status.body["error"], "VALIDATION_ERROR");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_bookings_admit_exactly_one() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let floor = floor(&app, 4).await;

    let (a, b, c) = tokio::join!(
        book(&app, &floor, "2030-06-20T19:00:00Z", 2),
        book(&app, &floor, "2030-06-20T19:15:00Z", 2),
        book(&app, &floor, "2030-06-20T20:00:00Z", 2),
    );

    let statuses = [a.status, b.status, c.status];
    let admitted = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    assert_eq!(admitted, 1, "{statuses:?}");
    assert!(
        statuses
            .iter()
            .all(|s| *s == StatusCode::CREATED || *s == StatusCode::BAD_REQUEST)
    );
}
