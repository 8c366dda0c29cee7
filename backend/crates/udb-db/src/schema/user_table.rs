use crate::{ColumnDef, TableDef};

use udb_core::columns::{EMAIL, HASHED_PASSWORD, ID, IS_ACTIVE, IS_SUPERUSER, IS_VERIFIED};

pub const DEFAULT_USER_TABLE_NAME: &str = "user";

/// Descriptor of the user table: the base columns plus any extra columns
/// the application declares with [`UserTable::with_column`].
#[derive(Debug, Clone, PartialEq)]
pub struct UserTable {
    table: TableDef,
}

impl UserTable {
    pub fn new() -> Self {
        Self::named(DEFAULT_USER_TABLE_NAME)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            table: TableDef::new(
                name,
                vec![
                    ColumnDef::guid(ID).primary_key(),
                    ColumnDef::varchar(EMAIL, 320)
                        .not_null()
                        .case_insensitive()
                        .unique()
                        .indexed(),
                    ColumnDef::varchar(HASHED_PASSWORD, 72).not_null(),
                    ColumnDef::boolean(IS_ACTIVE)
                        .not_null()
                        .default_value(true),
                    ColumnDef::boolean(IS_SUPERUSER)
                        .not_null()
                        .default_value(false),
                    ColumnDef::boolean(IS_VERIFIED)
                        .not_null()
                        .default_value(false),
                ],
            ),
        }
    }

    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.table.upsert_column(column);
        self
    }

    pub fn table(&self) -> &TableDef {
        &self.table
    }
}

impl Default for UserTable {
    fn default() -> Self {
        Self::new()
    }
}
