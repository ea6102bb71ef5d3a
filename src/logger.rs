//! Logging setup for staffdir.
//!
//! Wires the `log` facade to a fern dispatch writing to the configured log
//! file. The service layer only ever talks to the `log` macros; whether they
//! go anywhere is decided here, once, at startup.

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Initialize logging from configuration.
///
/// When logging is disabled this is a no-op, leaving the `log` macros
/// pointing at the default silent logger. Calling it twice returns an error
/// from the underlying logger registration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = config.level_filter()?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(
            fern::log_file(&config.file)
                .with_context(|| format!("Failed to open log file: {}", config.file))?,
        )
        .apply()
        .context("Logger already initialized")?;

    Ok(())
}
