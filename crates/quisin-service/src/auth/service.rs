//! Authentication use cases.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use quisin_auth::jwt::JwtEncoder;
use quisin_auth::password::{PasswordHasher, PasswordValidator};
use quisin_core::error::AppError;
use quisin_database::repositories::UserRepository;
use quisin_entity::user::{CreateUser, UserProfile, UserRole};

use crate::context::RequestContext;

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// A successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserProfile,
}

/// Input for creating the platform operator account.
#[derive(Debug, Clone)]
pub struct RegisterSuperadmin {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// Handles credential checks and token issuance.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            encoder,
        }
    }

    /// Verify credentials and issue an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let email = normalize_email(email);
        let Some(user) = self.user_repo.find_by_email(&email).await? else {
            warn!(email = %email, "Login attempt for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        if !user.can_login() {
            warn!(user_id = %user.id, "Login attempt on inactive account");
            return Err(AppError::unauthorized("Account is deactivated"));
        }

        let issued = self.encoder.issue(user.id, user.role, &user.email)?;
        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            user: user.profile(),
        })
    }

    /// Create the platform operator. Only allowed while none exists.
    pub async fn register_superadmin(
        &self,
        input: RegisterSuperadmin,
    ) -> Result<UserProfile, AppError> {
        if self.user_repo.exists_with_role(UserRole::Superadmin).await? {
            return Err(AppError::conflict("A superadmin already exists"));
        }

        self.validator.validate(&input.password)?;
        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                first_name: input.first_name.trim().to_string(),
                last_name: input.last_name.trim().to_string(),
                email: normalize_email(&input.email),
                phone: input.phone,
                password_hash,
                role: UserRole::Superadmin,
            })
            .await?;

        info!(user_id = %user.id, "Superadmin registered");
        Ok(user.profile())
    }

    /// Profile of the authenticated caller.
    pub async fn me(&self, ctx: &RequestContext) -> Result<UserProfile, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
