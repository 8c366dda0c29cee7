use crate::schema::quote_ident;
use crate::values::SqlValue;
use crate::{ColumnDef, DbError, Result as DbErrorResult};

use udb_core::Fields;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;

/// A named table and its ordered column list.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDef {
    name: String,
    columns: Vec<ColumnDef>,
}

impl TableDef {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDef>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quoted_name(&self) -> String {
        quote_ident(&self.name)
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Adds a column, replacing any existing column with the same name.
    pub fn upsert_column(&mut self, column: ColumnDef) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// `CREATE TABLE` followed by one `CREATE INDEX` per indexed, non-unique column.
    pub fn create_statements(&self) -> Vec<String> {
        let definitions = self
            .columns
            .iter()
            .map(ColumnDef::definition_sql)
            .collect::<Vec<_>>()
            .join(",\n    ");

        let mut statements = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.quoted_name(),
            definitions
        )];

        // UNIQUE columns already get an automatic index
        statements.extend(
            self.columns
                .iter()
                .filter(|c| c.indexed && !c.unique && !c.primary_key)
                .map(|c| {
                    format!(
                        "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                        quote_ident(&format!("ix_{}_{}", self.name, c.name)),
                        self.quoted_name(),
                        quote_ident(&c.name)
                    )
                }),
        );

        statements
    }

    /// Comma-separated, table-qualified select list with each column aliased
    /// to its bare name.
    pub fn select_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| {
                format!(
                    "{}.{} AS {}",
                    self.quoted_name(),
                    quote_ident(&c.name),
                    quote_ident(&c.name)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Qualified column reference, e.g. `"user"."id"`.
    pub fn qualified(&self, column: &str) -> String {
        format!("{}.{}", self.quoted_name(), quote_ident(column))
    }

    /// Converts record fields into statement parameters, in field order.
    ///
    /// Every field must be declared on this table.
    #[track_caller]
    pub(crate) fn encode_fields(&self, fields: &Fields) -> DbErrorResult<Vec<(String, SqlValue)>> {
        let mut values = Vec::with_capacity(fields.len());

        for (name, value) in fields {
            let Some(column) = self.column(name) else {
                return Err(DbError::UnknownColumn {
                    table: self.name.clone(),
                    column: name.clone(),
                    location: ErrorLocation::from(Location::caller()),
                });
            };
            values.push((name.clone(), column.encode(&self.name, value)?));
        }

        Ok(values)
    }

    pub(crate) fn decode_row(&self, row: &SqliteRow) -> DbErrorResult<Fields> {
        let mut fields = Fields::new();
        for column in &self.columns {
            fields.insert(column.name.clone(), column.decode(row)?);
        }
        Ok(fields)
    }
}
