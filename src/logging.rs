use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable that overrides the log filter
pub const LOG_ENV: &str = "SMARTPLAN_LOG";

/// Filter used when `SMARTPLAN_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "smartplan=debug"
    } else {
        "smartplan=info"
    }
}

/// Send logs to `path`. The terminal belongs to the UI, so nothing goes to stderr.
pub fn init(path: &Path, verbose: bool) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = if verbose {
        EnvFilter::new(default_filter(true))
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter(false)))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(())
}
