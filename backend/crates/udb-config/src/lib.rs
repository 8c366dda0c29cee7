mod config;
mod database_config;
mod env_overrides;
mod error;
mod log_level;
mod logging_config;

pub mod logger;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "UDB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".udb";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
