//! User repository implementation.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use quisin_core::error::AppError;
use quisin_core::result::AppResult;
use quisin_entity::user::{CreateUser, User, UserRole};

use crate::error::{db_error, violated_constraint};

/// Repository for user account queries.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))
    }

    /// Whether any account holds the given role.
    pub async fn exists_with_role(&self, role: UserRole) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE role = $1)")
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check role existence"))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        insert_user(&self.pool, data).await
    }
}

/// Insert a user through any executor, so the write can join a caller's
/// transaction.
pub(crate) async fn insert_user<'e, E>(executor: E, data: &CreateUser) -> AppResult<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "INSERT INTO users (first_name, last_name, email, phone, password_hash, role) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING *",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.password_hash)
    .bind(data.role)
    .fetch_one(executor)
    .await
    .map_err(|e| match violated_constraint(&e) {
        Some("users_email_key") => {
            AppError::conflict(format!("Email '{}' is already registered", data.email))
        }
        Some("users_single_superadmin") => AppError::conflict("A superadmin already exists"),
        _ => db_error("Failed to create user")(e),
    })
}
