//! Resolves the restaurant an admin acts on.

use std::sync::Arc;

use tracing::debug;

use quisin_core::error::AppError;
use quisin_database::repositories::RestaurantRepository;
use quisin_entity::restaurant::Restaurant;

use crate::context::RequestContext;

/// Maps an authenticated admin to the restaurant they administer.
#[derive(Debug, Clone)]
pub struct RestaurantService {
    restaurant_repo: Arc<RestaurantRepository>,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(restaurant_repo: Arc<RestaurantRepository>) -> Self {
        Self { restaurant_repo }
    }

    /// The caller's restaurant, or `NotFound` if they administer none.
    pub async fn resolve_for_admin(&self, ctx: &RequestContext) -> Result<Restaurant, AppError> {
        let restaurant = self
            .restaurant_repo
            .find_for_admin(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Restaurant not found for this admin"))?;

        debug!(user_id = %ctx.user_id, restaurant_id = %restaurant.id, "Resolved admin restaurant");
        Ok(restaurant)
    }
}
