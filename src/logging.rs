//! Logging setup: every mode writes `debug.log`, plus one live output
//!
//! The filter comes from `RUST_LOG` and defaults to `info`. The returned
//! guard flushes the file writer when dropped, so callers keep it alive
//! until exit.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::tui::{LogBuffer, LogMakeWriter};

const LOG_DIR: &str = ".";
const LOG_FILE: &str = "debug.log";
const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn file_writer() -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    tracing_appender::non_blocking(tracing_appender::rolling::never(LOG_DIR, LOG_FILE))
}

/// Log to stderr and `debug.log`
///
/// Used in headless mode, where stdout carries the rendered summary.
pub fn init_headless_logging() -> WorkerGuard {
    let (file, guard) = file_writer();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(env_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .init();

    guard
}

/// Log to an in-memory buffer shown by the dashboard, and to `debug.log`
///
/// Nothing is written to the terminal, which belongs to the dashboard.
pub fn init_tui_logging() -> (LogBuffer, WorkerGuard) {
    let (file, guard) = file_writer();
    let buffer = LogBuffer::default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(LogMakeWriter::new(buffer.clone()))
                .with_ansi(false)
                .with_target(false)
                .compact()
                .with_filter(env_filter()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
        .init();

    (buffer, guard)
}
