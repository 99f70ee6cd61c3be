//! Configuration for taskdesk.
//!
//! The only setting is where the task database lives. It can come from three
//! places, checked in this order:
//!
//! 1. the `TASKDESK_DB` environment variable,
//! 2. `storage.db_path` in `config.json` inside the data directory,
//! 3. `taskdesk.db` inside the data directory.
//!
//! The data directory is platform specific:
//! - **Windows**: `%LOCALAPPDATA%\taskdesk\taskdesk\`
//! - **macOS**: `~/Library/Application Support/taskdesk/taskdesk/`
//! - **Linux**: `~/.local/share/taskdesk/taskdesk/`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! println!("tasks are stored in {}", db_path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "TASKDESK_DB";

/// Storage settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct StorageConfig {
    /// Absolute or working-directory relative path of the SQLite file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads `config.json` from the data directory.
    ///
    /// A missing file yields the default configuration. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_file_path).with_context(|| Message::ConfigReadFailed(config_file_path.display().to_string()))?;
        let config = serde_json::from_str(&content).with_context(|| Message::ConfigParseError(config_file_path.display().to_string()))?;
        Ok(config)
    }

    /// Writes the configuration to `config.json` in the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_file_path, json).with_context(|| Message::ConfigSaveError(config_file_path.display().to_string()))?;
        Ok(())
    }

    /// Sets the database location stored in the configuration file.
    pub fn set_db_path(&mut self, path: impl Into<PathBuf>) {
        self.storage = Some(StorageConfig { db_path: Some(path.into()) });
    }

    /// Resolves the database location, creating its parent directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        let configured = env::var_os(DB_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.storage.as_ref().and_then(|storage| storage.db_path.clone()));

        match configured {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| Message::DataDirCreateFailed(parent.display().to_string()))?;
                }
                Ok(path)
            }
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
