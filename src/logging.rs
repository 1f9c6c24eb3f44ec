use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "focusflow.log";

/// Keeps the background log writer alive; drop it last
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Send tracing output to a daily-rolling file under `log_dir`.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init_logging(log_dir: &Path) -> Result<LoggingGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;

    tracing::info!("Logging initialized at {}", log_dir.display());

    Ok(LoggingGuard { _guard: guard })
}
