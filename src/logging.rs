//! Log file setup
//!
//! The terminal belongs to the form while it is up, so events are written to
//! a file under the platform data directory instead of stderr.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "signup-form.log";

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "signup_form=info";

/// Directory the log file is written to
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "signup", "signup-form").map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Install the global subscriber
///
/// The returned guard flushes buffered lines when dropped and must outlive
/// the UI. Without a home directory logging stays off.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    let (writer, guard) = file_writer(&dir)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}

fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}
