//! File-based logging.
//!
//! The TUI owns the terminal, so `tracing` output goes to a daily rotating
//! file instead of stdout.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogSettings;

const LOG_FILE_PREFIX: &str = "delus";

/// Initialize the global subscriber.
///
/// Logs are written to `<directory>/delus.YYYY-MM-DD`. `RUST_LOG` overrides
/// the configured filter. Keep the returned guard alive until exit so
/// buffered lines get flushed.
pub fn init_logging(settings: &LogSettings) -> anyhow::Result<WorkerGuard> {
    let log_dir = Path::new(&settings.directory);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("logging initialized, writing to {}/", settings.directory);

    Ok(guard)
}
