use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "KEYRUSH_LOG";

pub fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keyrush")
        .join("keyrush.log")
}

/// Route `log` records to a file, since the terminal belongs to the UI.
/// Level comes from `KEYRUSH_LOG`, defaulting to `info`.
pub fn init() -> Result<PathBuf> {
    let path = default_log_path();
    init_at(&path)?;
    Ok(path)
}

pub fn init_at(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
