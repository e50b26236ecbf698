use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "hub.log";

/// Keeps the background log writer alive; logs are flushed when it drops.
#[derive(Debug)]
pub struct LoggingGuard {
    _worker: WorkerGuard,
}

/// Routes tracing output to `<log_dir>/hub.log`; the terminal belongs to the TUI.
pub fn init(config: &LogConfig, log_dir: &Path) -> Result<LoggingGuard, AppError> {
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, worker) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(LoggingGuard { _worker: worker })
}
