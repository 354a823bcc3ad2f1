//! # quisin-auth
//!
//! Authentication and authorization primitives for Quisin.
//!
//! ## Modules
//!
//! - `jwt`: JWT token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement
//! - `rbac`: Role-based access control enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RbacEnforcer;
