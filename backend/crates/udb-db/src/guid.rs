//! Portable UUID column encoding.
//!
//! SQLite has no native UUID type, so ids are stored as the 36-character
//! lowercase hyphenated form in a `CHAR(36)` column.

use crate::{DbError, Result as DbErrorResult};

use uuid::Uuid;

pub const SQL_TYPE: &str = "CHAR(36)";

pub fn encode(id: Uuid) -> String {
    id.hyphenated().to_string()
}

#[track_caller]
pub fn decode(value: &str) -> DbErrorResult<Uuid> {
    match Uuid::parse_str(value) {
        Ok(id) => Ok(id),
        Err(e) => Err(DbError::decode(format!("Invalid UUID {value:?}: {e}"))),
    }
}
