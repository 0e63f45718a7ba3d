//! File logging for the terminal client.
//!
//! The TUI owns stdout, so tracing output goes to a per-session log file
//! under the platform cache directory instead of the terminal.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Installs the global subscriber writing to `<log dir>/<session_id>/client.log`.
///
/// The returned guard flushes buffered lines on drop; keep it alive until
/// the program exits.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = session_log_dir(&log_directory(), session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    // Only the file layer: the terminal is in raw mode while the game runs.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(session_id, "Logging initialized");
    tracing::info!(
        "Log file: {}",
        session_log_dir.join(LOG_FILE_NAME).display()
    );

    Ok(guard)
}

/// Platform cache directory for logs, falling back to the system temp dir.
pub fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "minus-one")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("minus-one").join("logs"))
}

pub fn session_log_dir(base: &Path, session_id: &str) -> PathBuf {
    // Session ids come from the environment; keep them to one path component.
    let sanitized: String = session_id
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect();
    let name = match sanitized.trim_matches('.') {
        "" => "session",
        _ => sanitized.as_str(),
    };
    base.join(name)
}
