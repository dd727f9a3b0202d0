use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::PostTuiError;

/// `$XDG_CACHE_HOME/posttui/posttui.log`, falling back to `~/.cache`.
pub fn log_file() -> Result<PathBuf, PostTuiError> {
    // Check the XDG_CACHE_HOME environment variable first
    let base_cache_dir = match env::var_os("XDG_CACHE_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let home = env::var_os("HOME")
                .ok_or_else(|| PostTuiError::Config("Home environment variable not set".to_string()))?;
            Path::new(&home).join(".cache")
        }
    };

    let app_cache_dir = base_cache_dir.join("posttui");

    // Create the directory if it doesn't exist
    fs::create_dir_all(&app_cache_dir)
        .map_err(|e| PostTuiError::Io(format!("Failed to create cache directory: {}", e)))?;

    Ok(app_cache_dir.join("posttui.log"))
}

/// Sends tracing output to the log file; the terminal belongs to the UI.
/// Filtered by `RUST_LOG`, `info` when unset.
pub fn init() -> Result<PathBuf, PostTuiError> {
    let path = log_file()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| PostTuiError::Config(format!("Failed to install logger: {}", e)))?;

    Ok(path)
}
