pub mod column;
pub mod oauth_account_table;
pub mod table;
pub mod user_table;

use crate::{OAuthAccountTable, Result as DbErrorResult, UserTable};

use log::info;
use sqlx::SqlitePool;

/// Quotes an SQL identifier, doubling embedded quotes.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Creates the user table, and the OAuth account table when given, if they
/// do not exist yet. All statements run in one transaction.
pub async fn create_tables(
    pool: &SqlitePool,
    users: &UserTable,
    oauth_accounts: Option<&OAuthAccountTable>,
) -> DbErrorResult<()> {
    let mut statements = users.table().create_statements();
    if let Some(oauth_accounts) = oauth_accounts {
        statements.extend(oauth_accounts.table().create_statements());
    }

    let mut tx = pool.begin().await?;
    for statement in &statements {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    info!(
        "Created tables: {}{}",
        users.table().name(),
        oauth_accounts
            .map(|t| format!(", {}", t.table().name()))
            .unwrap_or_default()
    );

    Ok(())
}
