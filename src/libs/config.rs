//! Configuration management for stunden.
//!
//! The configuration file holds one opaque section per output, keyed by the
//! output's [`name`](crate::libs::output::OutputPlugin::name). The selected
//! output receives its section unchanged and decides what to do with it; the
//! text report, for instance, accepts and ignores anything.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\wasis\stunden\config.json`
//! - **macOS**: `~/Library/Application Support/wasis/stunden/config.json`
//! - **Linux**: `~/.local/share/wasis/stunden/config.json`
//!
//! `stunden init` writes an empty object. Output sections are added by hand:
//!
//! ```json
//! {
//!   "outputs": {
//!     "text": {}
//!   }
//! }
//! ```
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use stunden::libs::config::Config;
//!
//! let config = Config::read()?;
//! let text_section = config.output_config("text");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Per-output configuration sections, passed to outputs as is.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Value>,
}

impl Config {
    /// Default location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from the application data directory.
    ///
    /// - **Missing file**: returns the default configuration (not an error)
    /// - **Corrupted file**: returns a parse error
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    /// Reads the configuration from an explicit path, defaulting when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was nothing to remove.
    pub fn delete() -> Result<bool> {
        Self::delete_at(&Self::path()?)
    }

    pub fn delete_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Configuration section for the output called `name`, if any.
    pub fn output_config(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name)
    }
}
