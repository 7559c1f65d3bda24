//! Mapping from pool and Diesel errors to the domain repository error.
//!
//! A unique-constraint violation maps to [`RepositoryError::Duplicate`]: the
//! store-level constraint is the authoritative guard against the race where
//! two concurrent requests both pass the exists pre-check, and callers must
//! see the same duplicate error either way.

use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to domain repository errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(error: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match error {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                debug!(
                    message = info.message(),
                    constraint = ?info.constraint_name(),
                    "unique violation treated as duplicate geometry"
                );
                Self::Duplicate
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                Self::connection(info.message().to_owned())
            }
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), "diesel operation failed");
                Self::query(info.message().to_owned())
            }
            other => Self::query(other.to_string()),
        }
    }
}
