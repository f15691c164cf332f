//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive sessions log to
//! `$QUICKFUND_HOME/logs/quickfund.log`. One-shot CLI commands log to stderr.
//! Filter resolution: `QUICKFUND_LOG`, then `RUST_LOG`, then [`DEFAULT_LOG_FILTER`].

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "QUICKFUND_LOG";
pub const LOG_FILE_NAME: &str = "quickfund.log";
pub const DEFAULT_LOG_FILTER: &str = "info,hyper=warn,reqwest=warn";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs a file-backed subscriber writing to `log_dir/quickfund.log`.
///
/// Idempotent: only the first call installs a subscriber and returns the
/// appender guard, which must be kept alive until shutdown so buffered lines
/// are flushed. Later calls return `Ok(None)`.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init_file_logging(log_dir: &Path) -> Result<Option<WorkerGuard>> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Ok(None);
    }

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let mut guard = Some(guard);
    LOGGING_INITIALIZED.get_or_init(|| {
        let installed = fmt()
            .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
            .with_writer(writer)
            .with_ansi(false)
            .try_init();
        if installed.is_err() {
            guard = None;
        }
    });
    Ok(guard)
}

/// Installs a stderr subscriber for one-shot commands. Quiet (`warn`) unless
/// a filter is set in the environment. Idempotent.
pub fn init_stderr_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .try_init();
    });
}
