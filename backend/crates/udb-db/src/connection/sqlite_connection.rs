use crate::{DbError, Result};

use udb_config::DatabaseConfig;

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Opens (creating if needed) the SQLite database at `path`.
///
/// Foreign keys are enforced on every pooled connection; OAuth account rows
/// rely on them for cascade deletes.
pub async fn connect(path: &Path, config: &DatabaseConfig) -> Result<SqlitePool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("Failed to open database {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Connected to {} (max {} connections)",
        path.display(),
        config.max_connections
    );

    Ok(pool)
}
