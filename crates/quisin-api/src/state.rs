//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use quisin_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator, RbacEnforcer};
use quisin_core::config::AppConfig;
use quisin_database::DatabasePool;
use quisin_database::repositories::{
    ReservationRepository, RestaurantRepository, TableRepository, UserRepository,
};
use quisin_service::reservation::ReservationStore;
use quisin_service::{
    AuthService, BookingService, ReservationService, RestaurantService, TableService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Role-based access control enforcer
    pub rbac_enforcer: Arc<RbacEnforcer>,

    // ── Services ─────────────────────────────────────────────
    /// Login, superadmin bootstrap, and profile lookups
    pub auth_service: Arc<AuthService>,
    /// Resolves the restaurant an admin manages
    pub restaurant_service: Arc<RestaurantService>,
    /// Table registry management
    pub table_service: Arc<TableService>,
    /// Reservation reads
    pub reservation_service: Arc<ReservationService>,
    /// Admission-checked reservation writes
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wires repositories, auth primitives, and services over `db`.
    pub fn new(config: AppConfig, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        // Repositories
        let user_repo = Arc::new(UserRepository::new(pool.clone()));
        let restaurant_repo = Arc::new(RestaurantRepository::new(pool.clone()));
        let table_repo = Arc::new(TableRepository::new(pool.clone()));
        let reservation_repo = Arc::new(ReservationRepository::new(pool));

        // Auth
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let rbac_enforcer = Arc::new(RbacEnforcer::new());

        // Services
        let auth_service = Arc::new(AuthService::new(
            user_repo,
            password_hasher,
            password_validator,
            jwt_encoder,
        ));
        let restaurant_service = Arc::new(RestaurantService::new(restaurant_repo));
        let table_service = Arc::new(TableService::new(table_repo));
        let reservation_service =
            Arc::new(ReservationService::new(Arc::clone(&reservation_repo)));
        let booking_service = Arc::new(BookingService::new(
            reservation_repo as Arc<dyn ReservationStore>,
            &config.reservation,
        ));

        Self {
            config: Arc::new(config),
            db,
            jwt_decoder,
            rbac_enforcer,
            auth_service,
            restaurant_service,
            table_service,
            reservation_service,
            booking_service,
        }
    }
}
