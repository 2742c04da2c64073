//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/posdeck/logs/`.
/// Log level is controlled by the `POSDECK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// POSDECK_LOG=debug posdeck
/// POSDECK_LOG=trace posdeck
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    init_at(&log_dir)
}

/// Initialize logging with an explicit log directory (used by tests and the
/// binary's `--log-dir` override).
pub fn init_at(log_dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "posdeck.log");

    // Default to info, allow override via POSDECK_LOG
    let env_filter = EnvFilter::try_from_env("POSDECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("posdeck=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("posdeck starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("posdeck").join("logs"))
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join("posdeck.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sets the process-global subscriber, so only one init test can exist.
    #[test]
    fn test_init_at_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        init_at(&log_dir).unwrap();
        assert!(log_dir.exists());
    }
}
