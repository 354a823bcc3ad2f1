//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles recognized by the route guards.
///
/// Roles are not a strict hierarchy. Guards name the roles they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform operator.
    Superadmin,
    /// Administrator of a single restaurant.
    Admin,
    /// Chain or branch manager.
    Manager,
    /// Kitchen staff.
    Kitchen,
    /// Floor staff.
    Waiter,
    /// Guest account.
    Customer,
}

impl UserRole {
    /// All roles, most privileged first.
    pub const ALL: [UserRole; 6] = [
        Self::Superadmin,
        Self::Admin,
        Self::Manager,
        Self::Kitchen,
        Self::Waiter,
        Self::Customer,
    ];

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Kitchen => "kitchen",
            Self::Waiter => "waiter",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = quisin_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == lowered)
            .ok_or_else(|| {
                quisin_core::AppError::validation(format!(
                    "Invalid user role: '{s}'. Expected one of: superadmin, admin, manager, kitchen, waiter, customer"
                ))
            })
    }
}
