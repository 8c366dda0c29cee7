use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing field: {field} {location}")]
    MissingField {
        field: String,
        location: ErrorLocation,
    },

    #[error("Invalid value for field {field}: expected {expected}, got {actual} {location}")]
    FieldType {
        field: String,
        expected: &'static str,
        actual: &'static str,
        location: ErrorLocation,
    },

    #[error("UUID parse error in field {field}: {source} {location}")]
    Uuid {
        field: String,
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field_type(field: &str, expected: &'static str, actual: &'static str) -> Self {
        Self::FieldType {
            field: field.to_string(),
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
