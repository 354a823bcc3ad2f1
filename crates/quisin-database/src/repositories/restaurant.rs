//! Restaurant repository implementation.

use sqlx::{PgExecutor, PgPool};
use tracing::debug;
use uuid::Uuid;

use quisin_core::result::AppResult;
use quisin_entity::restaurant::Restaurant;
use quisin_entity::user::{CreateUser, User};

use super::user::insert_user;
use crate::error::db_error;

/// Repository for restaurants and their admin assignments.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    pool: PgPool,
}

impl RestaurantRepository {
    /// Create a new restaurant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The restaurant administered by `user_id`, if any.
    pub async fn find_for_admin(&self, user_id: Uuid) -> AppResult<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>(
            "SELECT r.* FROM restaurants r \
             JOIN restaurant_admins ra ON ra.restaurant_id = r.id \
             WHERE ra.user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find restaurant for admin"))
    }

    /// Register a restaurant with just a name.
    pub async fn create(&self, name: &str) -> AppResult<Restaurant> {
        insert_restaurant(&self.pool, name).await
    }

    /// Register a restaurant together with a new admin account.
    ///
    /// The account, the restaurant, and the assignment are written in one
    /// transaction; any failure leaves none of them behind.
    pub async fn create_with_admin(
        &self,
        name: &str,
        admin: &CreateUser,
    ) -> AppResult<(Restaurant, User)> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("Failed to begin onboarding transaction"))?;

        let user = insert_user(&mut *tx, admin).await?;
        let restaurant = insert_restaurant(&mut *tx, name).await?;
        upsert_admin(&mut *tx, restaurant.id, user.id).await?;

        tx.commit()
            .await
            .map_err(db_error("Failed to commit onboarding transaction"))?;

        debug!(restaurant_id = %restaurant.id, admin_id = %user.id, "Restaurant onboarded");
        Ok((restaurant, user))
    }

    /// Make `user_id` the admin of `restaurant_id`, replacing any previous
    /// assignment of that user.
    pub async fn assign_admin(&self, restaurant_id: Uuid, user_id: Uuid) -> AppResult<()> {
        upsert_admin(&self.pool, restaurant_id, user_id).await
    }
}

async fn insert_restaurant<'e, E>(executor: E, name: &str) -> AppResult<Restaurant>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Restaurant>("INSERT INTO restaurants (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(executor)
        .await
        .map_err(db_error("Failed to create restaurant"))
}

async fn upsert_admin<'e, E>(executor: E, restaurant_id: Uuid, user_id: Uuid) -> AppResult<()>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        "INSERT INTO restaurant_admins (user_id, restaurant_id) VALUES ($1, $2) \
         ON CONFLICT (user_id) DO UPDATE SET restaurant_id = EXCLUDED.restaurant_id",
    )
    .bind(user_id)
    .bind(restaurant_id)
    .execute(executor)
    .await
    .map_err(db_error("Failed to assign restaurant admin"))?;
    Ok(())
}
