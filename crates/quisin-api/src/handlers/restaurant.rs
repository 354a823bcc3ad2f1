//! The admin's own restaurant.

use axum::Json;

use quisin_entity::restaurant::Restaurant;

use crate::dto::response::ApiResponse;
use crate::extractors::RestaurantAdmin;

/// GET /api/admin/restaurant
pub async fn get_restaurant(admin: RestaurantAdmin) -> Json<ApiResponse<Restaurant>> {
    Json(ApiResponse::ok(admin.restaurant))
}
