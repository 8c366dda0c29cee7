//! `UDB_*` environment variables, layered over `config.toml`.
//!
//! Unset variables leave the file value alone. Values that fail to parse are
//! ignored, except `UDB_LOG_LEVEL`, which falls back to the default level.

use crate::{Config, LogLevel};

use std::env;
use std::str::FromStr;

pub(crate) const DATABASE_PATH: &str = "UDB_DATABASE_PATH";
pub(crate) const DATABASE_MAX_CONNECTIONS: &str = "UDB_DATABASE_MAX_CONNECTIONS";
pub(crate) const LOG_LEVEL: &str = "UDB_LOG_LEVEL";
pub(crate) const LOG_COLORED: &str = "UDB_LOG_COLORED";
/// Empty string switches file logging off.
pub(crate) const LOG_FILE: &str = "UDB_LOG_FILE";

pub(crate) fn apply(config: &mut Config) {
    if let Some(path) = var(DATABASE_PATH) {
        config.database.path = path;
    }
    if let Some(max_connections) = parsed(DATABASE_MAX_CONNECTIONS) {
        config.database.max_connections = max_connections;
    }

    if let Some(level) = var(LOG_LEVEL) {
        config.logging.level = LogLevel::parse_lenient(&level);
    }
    if let Some(colored) = var(LOG_COLORED) {
        config.logging.colored = is_truthy(&colored);
    }
    if let Some(file) = var(LOG_FILE) {
        config.logging.file = Some(file).filter(|f| !f.is_empty());
    }
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn parsed<T: FromStr>(name: &str) -> Option<T> {
    var(name)?.trim().parse().ok()
}

pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
