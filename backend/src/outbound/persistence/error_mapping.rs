//! Diesel and pool error mapping for the user store.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserStoreError;

use super::pool::PoolError;

/// Map pool failures to connection errors.
pub(super) fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel errors raised by reads and deletes.
pub(super) fn map_diesel_error(error: DieselError) -> UserStoreError {
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
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserStoreError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => UserStoreError::query("database query error"),
        _ => UserStoreError::query("database error"),
    }
}

/// Map Diesel errors raised by writes that set `name`.
///
/// A unique violation is the store's conflict signal; everything else falls
/// through to [`map_diesel_error`].
pub(super) fn map_name_write_error(error: DieselError, name: &str) -> UserStoreError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
            debug!(
                constraint = ?info.constraint_name(),
                "user name unique constraint rejected write"
            );
            UserStoreError::conflict(name)
        }
        other => map_diesel_error(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    struct StubInfo;

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint \"users_name_key\""
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("users")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            Some("users_name_key")
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo))
    }

    #[rstest]
    fn unique_violation_becomes_conflict() {
        let err = map_name_write_error(database_error(DatabaseErrorKind::UniqueViolation), "bek");
        assert_eq!(err, UserStoreError::conflict("bek"));
    }

    #[rstest]
    fn unique_violation_outside_writes_is_a_query_error() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::UniqueViolation));
        assert!(matches!(err, UserStoreError::Query { .. }));
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::ClosedConnection), true)]
    #[case(DieselError::NotFound, false)]
    #[case(DieselError::RollbackTransaction, false)]
    fn classifies_connection_failures(#[case] error: DieselError, #[case] is_connection: bool) {
        let mapped = map_name_write_error(error, "alice");
        assert_eq!(
            matches!(mapped, UserStoreError::Connection { .. }),
            is_connection
        );
    }

    #[rstest]
    fn pool_failures_become_connection_errors() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, UserStoreError::connection("timed out"));
    }
}
