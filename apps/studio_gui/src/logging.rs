use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use chrono::Local;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

static INSTALLED: OnceLock<PathBuf> = OnceLock::new();

/// Installs the process-wide sinks: console (stderr) at INFO, overridable
/// via `RUST_LOG`, plus a dated file at DEBUG under the log directory.
/// Guarded: the first call installs, every later call is a no-op returning
/// `Ok(false)`.
pub fn init(log_dir: &Path) -> Result<bool> {
    if INSTALLED.get().is_some() {
        return Ok(false);
    }

    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory '{}'", log_dir.display()))?;
    let log_path = log_dir.join(format!("studio_{}.log", Local::now().format("%Y%m%d")));
    let log_file = File::options()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .with_filter(LevelFilter::DEBUG);

    // try_init fails when another dispatcher is already installed (tests do
    // this); the guard above still marks us done so we never stack layers.
    let installed = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();
    let _ = INSTALLED.set(log_path);

    if installed {
        tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    }
    Ok(installed)
}

/// The dated file the current process logs to, once `init` has run.
pub fn log_file_path() -> Option<&'static Path> {
    INSTALLED.get().map(PathBuf::as_path)
}
