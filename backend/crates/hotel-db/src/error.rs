use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// SQLSTATE class 23: integrity constraint violation
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Constraint violation ({constraint:?}): {message} {location}")]
    Conflict {
        /// Name of the violated constraint or field, when known
        constraint: Option<String>,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity {id} not found {location}")]
    NotFound { id: Uuid, location: ErrorLocation },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

/// True when a SQLSTATE code reports an integrity constraint violation
pub fn is_integrity_violation(code: Option<&str>) -> bool {
    code.is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS))
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && is_integrity_violation(db_err.code().as_deref())
        {
            return Self::Conflict {
                constraint: db_err.constraint().map(str::to_string),
                message: db_err.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
