//! Login, operator bootstrap, and current-user lookup.

pub mod service;

pub use service::{AuthService, LoginResult, RegisterSuperadmin};
