use crate::{ConfigError, ConfigErrorResult, LoggingConfig};

use std::fmt::Display;
use std::fs::OpenOptions;
use std::path::Path;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Installs the global `log` backend.
///
/// Lines go to `log_file` (appended, never coloured) when given, otherwise to
/// stdout, coloured if `config.colored`. Errors if a logger is already set.
pub fn initialize(config: &LoggingConfig, log_file: Option<&Path>) -> ConfigErrorResult<()> {
    let level = *config.level;

    let output = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::io(path, e))?;
            Dispatch::new().format(plain_line).chain(file)
        }
        None if config.colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, colors.color(record.level()), message, record)
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        .chain(output)
        .apply()
        .map_err(|e| ConfigError::logger(e.to_string()))?;

    let target = log_file.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
    info!("Logger initialized: level={level}, output={target}");

    Ok(())
}

fn plain_line(out: FormatCallback, message: &std::fmt::Arguments, record: &Record) {
    write_line(out, record.level(), message, record)
}

fn write_line(
    out: FormatCallback,
    level: impl Display,
    message: &std::fmt::Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "{} {:<5} {}: {}",
        humantime::format_rfc3339_millis(SystemTime::now()),
        level,
        record.target(),
        message
    ))
}
