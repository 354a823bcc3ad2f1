//! Convenience result type alias for Quisin.

use crate::error::AppError;

/// A specialized `Result` type for Quisin operations.
pub type AppResult<T> = Result<T, AppError>;
