pub mod connection;
pub mod error;
pub mod guid;
pub mod repositories;
pub mod schema;
pub mod user_database;

mod values;

pub use connection::sqlite_connection::connect;
pub use error::{DbError, Result};
pub use repositories::user_record_store::UserRecordStore;
pub use schema::column::{ColumnDef, ColumnKind, ForeignKey};
pub use schema::create_tables;
pub use schema::oauth_account_table::OAuthAccountTable;
pub use schema::table::TableDef;
pub use schema::user_table::UserTable;
pub use user_database::UserDatabase;

#[cfg(test)]
mod tests;
