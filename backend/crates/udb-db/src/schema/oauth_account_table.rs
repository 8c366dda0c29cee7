use crate::{ColumnDef, TableDef, UserTable};

use udb_core::columns::{
    ACCESS_TOKEN, ACCOUNT_EMAIL, ACCOUNT_ID, EXPIRES_AT, ID, OAUTH_NAME, REFRESH_TOKEN, USER_ID,
};

pub const DEFAULT_OAUTH_ACCOUNT_TABLE_NAME: &str = "oauth_account";

/// Descriptor of the OAuth account table. `user_id` references the given
/// user table and cascades on delete.
///
/// The column set is fixed: it mirrors the fields of `OAuthAccount`.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthAccountTable {
    table: TableDef,
}

impl OAuthAccountTable {
    pub fn new(users: &UserTable) -> Self {
        Self::named(DEFAULT_OAUTH_ACCOUNT_TABLE_NAME, users)
    }

    pub fn named(name: impl Into<String>, users: &UserTable) -> Self {
        Self {
            table: TableDef::new(
                name,
                vec![
                    ColumnDef::guid(ID).primary_key(),
                    ColumnDef::varchar(OAUTH_NAME, 100).not_null().indexed(),
                    ColumnDef::varchar(ACCESS_TOKEN, 1024).not_null(),
                    ColumnDef::integer(EXPIRES_AT),
                    ColumnDef::varchar(REFRESH_TOKEN, 1024),
                    ColumnDef::varchar(ACCOUNT_ID, 320).not_null().indexed(),
                    ColumnDef::varchar(ACCOUNT_EMAIL, 320).not_null(),
                    ColumnDef::guid(USER_ID)
                        .not_null()
                        .references(users.table().name(), ID, true),
                ],
            ),
        }
    }

    pub fn table(&self) -> &TableDef {
        &self.table
    }
}
