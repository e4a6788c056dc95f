//! Diff configuration module
//!
//! Settings are persisted with `confy` in the OS-specific config directory.

use crate::constant::APP_NAME;
use crate::diff::{DiffAlgorithm, DiffOptions, InlineMode};
use crate::style::Palette;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Falling back to default diff settings: {}", e);
            Self {
                settings: Settings::default(),
            }
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Line alignment algorithm
    #[serde(default)]
    pub algorithm: DiffAlgorithm,

    /// Highlighting inside modified lines
    #[serde(default)]
    pub inline: InlineMode,

    /// Alignment time limit in milliseconds (0 = unlimited)
    #[serde(default)]
    pub deadline_ms: u64,

    #[serde(default)]
    pub palette: Palette,
}

impl Settings {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            algorithm: self.algorithm,
            inline: self.inline,
            deadline: (self.deadline_ms > 0).then(|| Duration::from_millis(self.deadline_ms)),
        }
    }
}
