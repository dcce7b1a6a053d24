//! Shared Diesel error mapping for the exercise tracker repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constructors a repository error type exposes to the shared mappers.
pub(crate) struct ErrorConstructors<E> {
    pub connection: fn(String) -> E,
    pub constraint: fn(String) -> E,
    pub query: fn(String) -> E,
}

/// Map pool errors into the repository's connection variant.
pub(crate) fn map_basic_pool_error<E>(error: PoolError, ctors: &ErrorConstructors<E>) -> E {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    (ctors.connection)(message)
}

/// Map Diesel errors into connection, constraint or query variants.
///
/// Integrity violations (unique, not-null, check) become constraint errors so
/// the service can report them as rejected writes.
pub(crate) fn map_basic_diesel_error<E>(error: DieselError, ctors: &ErrorConstructors<E>) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => (ctors.query)("record not found".to_owned()),
        DieselError::QueryBuilderError(_) => (ctors.query)("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            (ctors.connection)("database connection error".to_owned())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation,
            info,
        ) => (ctors.constraint)(info.message().to_owned()),
        _ => (ctors.query)("database error".to_owned()),
    }
}
