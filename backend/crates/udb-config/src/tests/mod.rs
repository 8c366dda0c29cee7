
use std::env;

use tempfile::TempDir;

/// Sets or clears one environment variable for the lifetime of the guard.
///
/// Tests touching the environment must run `#[serial]`.
pub(crate) struct EnvGuard {
    name: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(name: &'static str, value: &str) -> Self {
        let previous = env::var(name).ok();
        // SAFETY: callers are #[serial], so no other thread reads the environment.
        unsafe { env::set_var(name, value) };
        Self { name, previous }
    }

    pub(crate) fn unset(name: &'static str) -> Self {
        let previous = env::var(name).ok();
        // SAFETY: as above.
        unsafe { env::remove_var(name) };
        Self { name, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: as above.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.name, value),
                None => env::remove_var(self.name),
            }
        }
    }
}

/// Points `UDB_CONFIG_DIR` at a fresh temp dir and clears every `UDB_*`
/// override so the host environment cannot leak into a test.
pub(crate) fn isolated_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("UDB_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::unset("UDB_DATABASE_PATH"),
        EnvGuard::unset("UDB_DATABASE_MAX_CONNECTIONS"),
        EnvGuard::unset("UDB_LOG_LEVEL"),
        EnvGuard::unset("UDB_LOG_COLORED"),
        EnvGuard::unset("UDB_LOG_FILE"),
    ];
    (temp, guards)
}

pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
}
