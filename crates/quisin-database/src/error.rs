//! Classification of sqlx errors into application errors.

use quisin_core::error::{AppError, ErrorKind};

/// SQLSTATE codes for failures that succeed on retry.
const RETRYABLE_STATES: [&str; 2] = ["40001", "40P01"];

/// Map a sqlx error to `Database`, or to `Contention` for serialization
/// failures and deadlocks.
pub(crate) fn db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| {
        let retryable = matches!(
            &err,
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|code| RETRYABLE_STATES.contains(&code.as_ref()))
        );
        let kind = if retryable {
            ErrorKind::Contention
        } else {
            ErrorKind::Database
        };
        AppError::with_source(kind, context, err)
    }
}

/// Name of the violated constraint, if `err` is a constraint violation.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
