use crate::{ColumnDef, ColumnKind, DbError, Result as DbErrorResult, guid};

use udb_core::FieldValue;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

/// A field value after column-level encoding, ready to bind.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Text(String),
}

pub(crate) fn push_value(query: &mut QueryBuilder<'_, Sqlite>, value: SqlValue) {
    match value {
        SqlValue::Null => query.push_bind(None::<String>),
        SqlValue::Bool(flag) => query.push_bind(flag),
        SqlValue::Integer(n) => query.push_bind(n),
        SqlValue::Text(text) => query.push_bind(text),
    };
}

impl ColumnDef {
    /// NULL passes through untouched; NOT NULL is left to the database.
    #[track_caller]
    pub(crate) fn encode(&self, table: &str, value: &FieldValue) -> DbErrorResult<SqlValue> {
        match (self.kind, value) {
            (_, FieldValue::Null) => Ok(SqlValue::Null),
            (ColumnKind::Guid, FieldValue::Uuid(id)) => Ok(SqlValue::Text(guid::encode(*id))),
            (ColumnKind::Guid, FieldValue::Text(text)) => {
                Ok(SqlValue::Text(guid::encode(guid::decode(text)?)))
            }
            (ColumnKind::Text { .. }, FieldValue::Text(text)) => Ok(SqlValue::Text(text.clone())),
            (ColumnKind::Boolean, FieldValue::Bool(flag)) => Ok(SqlValue::Bool(*flag)),
            (ColumnKind::Integer, FieldValue::Integer(n)) => Ok(SqlValue::Integer(*n)),
            (kind, other) => Err(DbError::ColumnType {
                table: table.to_string(),
                column: self.name.clone(),
                expected: kind.name(),
                actual: other.type_name(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub(crate) fn decode(&self, row: &SqliteRow) -> DbErrorResult<FieldValue> {
        let name = self.name.as_str();

        let value = match self.kind {
            ColumnKind::Guid => match row.try_get::<Option<String>, _>(name)? {
                Some(text) => FieldValue::Uuid(guid::decode(&text)?),
                None => FieldValue::Null,
            },
            ColumnKind::Text { .. } => row.try_get::<Option<String>, _>(name)?.into(),
            ColumnKind::Boolean => row.try_get::<Option<bool>, _>(name)?.into(),
            ColumnKind::Integer => row.try_get::<Option<i64>, _>(name)?.into(),
        };

        Ok(value)
    }
}
