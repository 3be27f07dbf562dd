//! Store configuration, read from `roster.toml`
//!
//! ```toml
//! # Omit `records` to start from the demo seed; `records = []` starts empty.
//! [[records]]
//! name = "Yuva"
//! designation = "Intern"
//! registration_number = 205
//! ```

use crate::store::RecordStore;
use roster_core::{Record, RosterResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Errors reading or writing a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid config TOML
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Store configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// Initial records; `None` means the demo seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
}

impl RosterConfig {
    /// Config that starts with no records
    pub fn empty() -> Self {
        Self {
            records: Some(Vec::new()),
        }
    }

    /// Parse config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: "roster::config", path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Render config as TOML text
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Build the initial store
    ///
    /// Configured records go through the same checks as `insert`.
    pub fn build_store(&self) -> RosterResult<RecordStore> {
        match &self.records {
            None => Ok(RecordStore::seeded()),
            Some(records) => RecordStore::from_records(records.iter().cloned()),
        }
    }
}
