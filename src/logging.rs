//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so logs only ever go to a daily rolling file.
//! Without a usable log directory they are discarded.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "traefik-labels.log";

/// Keeps the file writer thread alive; drop it only on exit
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
pub fn init_logging(log_dir: Option<&Path>) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("traefik_labels=info"));

    let mut file_guard = None;
    let file_layer = log_dir.and_then(|dir| {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Failed to create log directory: {e}");
            return None;
        }
        let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
    });

    // try_init: a subscriber may already be set (tests)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init();

    LogGuard {
        _file_guard: file_guard,
    }
}
