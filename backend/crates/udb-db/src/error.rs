use udb_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// Driver and storage errors, constraint violations included, unchanged.
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("OAuth account table is not configured {location}")]
    FeatureNotConfigured { location: ErrorLocation },

    #[error("Unknown column {column} for table {table} {location}")]
    UnknownColumn {
        table: String,
        column: String,
        location: ErrorLocation,
    },

    #[error("Column {table}.{column} expects {expected}, got {actual} {location}")]
    ColumnType {
        table: String,
        column: String,
        expected: &'static str,
        actual: &'static str,
        location: ErrorLocation,
    },

    #[error("Decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Record error: {source} {location}")]
    Record {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn feature_not_configured() -> Self {
        Self::FeatureNotConfigured {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_feature_not_configured(&self) -> bool {
        matches!(self, Self::FeatureNotConfigured { .. })
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::UniqueViolation))
    }

    pub fn is_not_null_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::NotNullViolation))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self.database_error_kind(), Some(ErrorKind::ForeignKeyViolation))
    }

    fn database_error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(e),
                ..
            } => Some(e.kind()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Record {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
