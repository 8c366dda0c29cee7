pub mod sqlite_connection;
