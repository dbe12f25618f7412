//! Logging Setup
//!
//! Routes `log` macros through tracing into a daily-rolling file under the
//! platform data directory. Nothing is written to the terminal: the TUI
//! owns the screen, and stray log lines would corrupt the alternate-screen
//! buffer.
//!
//! `init` returns the appender guard; dropping it flushes buffered lines,
//! so `main` holds it for the process lifetime.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directory that receives the rolling `jabberwock.log.*` files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jabberwock")
        .join("logs")
}

/// Install the global subscriber.
///
/// Returns `None` when a subscriber is already set (repeated init in
/// tests), `Some(guard)` otherwise. Filtering honors `RUST_LOG`, defaulting
/// to `info`.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("warning: cannot create log directory {}: {e}", dir.display());
    }

    let file_appender = tracing_appender::rolling::daily(&dir, "jabberwock.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    // Bridge `log` macros (used throughout the crate) into tracing.
    let _ = tracing_log::LogTracer::init();

    Some(guard)
}
