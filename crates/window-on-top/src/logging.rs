//! Tracing subscriber setup.
//!
//! Logs go to stderr and, when enabled, to a daily rolling file. Release
//! builds run without a console on Windows, so the file is the only sink
//! there.

use crate::config::{Config, LoggingConfig};

use std::fs;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "window-on-top.log";

/// Initialise the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub(crate) fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let mut dir_error = None;
    let (file_layer, guard) = match config.log_to_file.then(Config::log_dir).flatten() {
        Some(log_dir) => match fs::create_dir_all(&log_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                dir_error = Some((log_dir, e));
                (None, None)
            }
        },
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();

    if let Some((log_dir, e)) = dir_error {
        warn!(
            log_dir = ?log_dir,
            error = %e,
            "Failed to create log directory, file logging disabled"
        );
    }

    guard
}
