//! Logging methods.

use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "graphic_options.log";

/// Keeps the file log flushing until dropped.
#[allow(missing_copy_implementations)]
#[derive(Debug)]
#[must_use]
pub struct Trace {
    _file_log_guard: WorkerGuard,
}

/// Install the global subscriber, logging to a daily rolling file in `log_directory`.
///
/// Debug builds also log to stderr. The level defaults to `INFO` and can be overridden with
/// `RUST_LOG`. Installing twice only reports the failure, since the host may own the subscriber.
pub fn initialize(log_directory: impl AsRef<Path>) -> Trace {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let file_appender = tracing_appender::rolling::daily(log_directory, LOG_FILE_PREFIX);
    let (file_writer, _file_log_guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = fmt::Layer::new()
        .compact()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    #[cfg(debug_assertions)]
    let registry = registry.with(
        fmt::Layer::new()
            .compact()
            .without_time()
            .with_line_number(true)
            .with_writer(std::io::stderr),
    );

    if let Err(err) = registry.try_init() {
        eprintln!("graphic options tracing was not installed: {err}");
    }
    tracing::debug!("graphic options logging initialized");
    Trace { _file_log_guard }
}
