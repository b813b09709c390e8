use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::AdvisorError;

const APP_DIR_NAME: &str = "fertilizer-advisor";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Classification model to load at startup
    pub model_path: Option<PathBuf>,
    /// Enable debug logging
    pub verbose: bool,
}

impl AppConfig {
    pub fn default_path() -> Result<PathBuf, AdvisorError> {
        Ok(dirs::config_dir()
            .ok_or(AdvisorError::NoConfigDir)?
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }

    /// Read the config from the user's config directory, if there is one.
    pub fn from_local_file() -> Result<Option<Self>, AdvisorError> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::from_path(&config_path).map(Some)
        } else {
            debug!("No config file at {:?}", config_path);
            Ok(None)
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, AdvisorError> {
        let file =
            std::fs::File::open(path).map_err(|e| AdvisorError::ConfigIO { source: e })?;
        serde_json::from_reader(file).map_err(|e| AdvisorError::ConfigSerialize { source: e })
    }

    pub fn save(&self) -> Result<(), AdvisorError> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AdvisorError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AdvisorError::ConfigIO { source: e })?;
        }
        let file =
            std::fs::File::create(path).map_err(|e| AdvisorError::ConfigIO { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| AdvisorError::ConfigSerialize { source: e })
    }
}
