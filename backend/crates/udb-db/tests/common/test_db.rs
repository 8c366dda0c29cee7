use udb_db::{OAuthAccountTable, UserTable, create_tables};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::common::FIRST_NAME;

/// Creates an in-memory SQLite pool with foreign keys enforced
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// User table with an extra nullable `first_name` column
pub fn knight_user_table() -> UserTable {
    UserTable::new().with_column(udb_db::ColumnDef::text(FIRST_NAME))
}

/// Pool with only the user table created
pub async fn create_user_only_pool() -> (SqlitePool, UserTable) {
    let pool = create_test_pool().await;
    let users = knight_user_table();
    create_tables(&pool, &users, None)
        .await
        .expect("Failed to create user table");
    (pool, users)
}

/// Pool with both the user and OAuth account tables created
pub async fn create_oauth_pool() -> (SqlitePool, UserTable, OAuthAccountTable) {
    let pool = create_test_pool().await;
    let users = knight_user_table();
    let oauth_accounts = OAuthAccountTable::new(&users);
    create_tables(&pool, &users, Some(&oauth_accounts))
        .await
        .expect("Failed to create tables");
    (pool, users, oauth_accounts)
}

/// Number of OAuth account rows, bypassing the store
pub async fn count_oauth_rows(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM oauth_account")
        .fetch_one(pool)
        .await
        .expect("Failed to count oauth_account rows")
}
