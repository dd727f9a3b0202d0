use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PostTuiError;
use crate::models::locale::Locale;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    /// Redraw interval, keeps the relative time current.
    pub tick_rate_ms: u64,
    /// Post document used when none is given on the command line.
    pub post: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            tick_rate_ms: 1000,
            post: None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf, PostTuiError> {
        let config_path = dirs::home_dir()
            .ok_or_else(|| PostTuiError::Config("Could not find home directory".to_string()))?
            .join(".config/posttui/config.json");
        Ok(config_path)
    }

    /// Loads the user config, falling back to defaults when there is none.
    pub fn load() -> Result<Self, PostTuiError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, PostTuiError> {
        if !config_path.exists() {
            debug!(path = ?config_path, "no config file, using defaults");
            return Ok(Config::default());
        }

        let file = File::open(config_path)
            .with_context(|| format!("Failed to open config file at {:?}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context("Failed to parse config JSON")?;

        if config.tick_rate_ms == 0 {
            return Err(PostTuiError::Config("tick_rate_ms must be greater than zero".to_string()));
        }

        Ok(config)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
