use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, LoggingConfig, env_overrides,
};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Settings for the user store, read from the `[database]` and `[logging]`
/// tables of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads `config.toml` from [`Config::config_dir`], creating the directory
    /// on first use, then applies `UDB_*` environment overrides.
    ///
    /// A missing file yields defaults. Values are not validated here; call
    /// [`Config::validate`] once loaded.
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir).map_err(|e| ConfigError::io(&dir, e))?;

        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&path, &contents)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::io(&path, e)),
        };

        env_overrides::apply(&mut config);

        Ok(config)
    }

    fn parse(path: &Path, contents: &str) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// `UDB_CONFIG_DIR` when set, otherwise `.udb` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir()
            .map(|cwd| cwd.join(DEFAULT_CONFIG_DIR_NAME))
            .map_err(|e| ConfigError::io(Path::new("."), e))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.logging.validate()
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        Ok(Some(Self::config_dir()?.join(file)))
    }

    pub fn log_summary(&self) {
        info!(
            "User store database: {} ({} pooled connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "Logging: level={}, colored={}, target={}",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }
}
