//! RBAC enforcement logic: checks whether a role may use a route group.

use quisin_core::error::AppError;
use quisin_entity::user::UserRole;

/// Enforces role-based access control for route groups.
///
/// Roles do not inherit from each other: a guard lists every role it
/// accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Returns `Ok(())` if `actual` is one of `allowed`, or a `Forbidden`
    /// error otherwise.
    pub fn require_any_role(
        &self,
        actual: UserRole,
        allowed: &[UserRole],
    ) -> Result<(), AppError> {
        if allowed.contains(&actual) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role '{actual}' is not permitted to access this resource"
            )))
        }
    }
}
