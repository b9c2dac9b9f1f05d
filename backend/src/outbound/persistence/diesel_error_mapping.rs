//! Translation of pool and Diesel failures into repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::FoodProductRepositoryError;

use super::pool::PoolError;

/// Name of the unique constraint on `foodproduct.name`.
pub(crate) const NAME_UNIQUE_CONSTRAINT: &str = "foodproduct_name_key";

pub(crate) fn map_pool_error(error: PoolError) -> FoodProductRepositoryError {
    FoodProductRepositoryError::connection(error.into_message())
}

/// Map a Diesel error raised while handling the product called `name`.
///
/// Unique violations become [`FoodProductRepositoryError::DuplicateName`];
/// dropped connections become `Connection`; everything else is `Query`.
pub(crate) fn map_diesel_error(
    error: DieselError,
    name: Option<&str>,
) -> FoodProductRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(%error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            if info
                .constraint_name()
                .is_some_and(|constraint| constraint != NAME_UNIQUE_CONSTRAINT)
            {
                return FoodProductRepositoryError::query(info.message());
            }
            match name {
                Some(name) => FoodProductRepositoryError::duplicate_name(name),
                None => FoodProductRepositoryError::query(info.message()),
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            FoodProductRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => FoodProductRepositoryError::query(info.message()),
        DieselError::BrokenTransactionManager => {
            FoodProductRepositoryError::connection("transaction manager is broken")
        }
        other => FoodProductRepositoryError::query(other.to_string()),
    }
}
