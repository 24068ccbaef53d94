use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "TUDU_LOG";
/// Environment variable overriding the log file location.
pub const LOG_PATH_ENV: &str = "TUDU_LOG_PATH";

const DEFAULT_FILTER: &str = "warn";

/// Route tracing output to a file. The terminal belongs to the editor, so
/// nothing is ever written to stdout or stderr from here.
///
/// Fails if a global subscriber is already installed.
pub fn init(default_path: &Path) -> Result<()> {
    let path = std::env::var(LOG_PATH_ENV)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| default_path.to_path_buf(), PathBuf::from);

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = file_subscriber(open(&path)?, filter);

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    tracing::debug!(path = %path.display(), "logging to file");
    Ok(())
}

fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .finish()
}

fn open(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
