use anyhow::Result;
use std::env::consts::OS;
use std::env::var_os;
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;

/// Platform-specific application data directory.
///
/// Holds `config.json` and, unless overridden, `taskdesk.db`:
/// - **Windows**: `%LOCALAPPDATA%\<owner>\<name>`
/// - **macOS**: `~/Library/Application Support/<owner>/<name>`
/// - **Linux** and others: `~/.local/share/<owner>/<name>`
///
/// `<owner>` and `<name>` come from `Cargo.toml` at build time. When the
/// base variable is unset the current directory stands in for it.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let (variable, suffix) = match OS {
            "windows" => ("LOCALAPPDATA", ""),
            "macos" => ("HOME", "Library/Application Support"),
            _ => ("HOME", ".local/share"),
        };
        let root = var_os(variable).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

        Self {
            base_path: root.join(suffix).join(VENDOR_NAME).join(APP_NAME),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
