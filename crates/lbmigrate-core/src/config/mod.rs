//! Migration configuration.
//!
//! `MigrationConfig` is passed explicitly into the pipeline. It can be built
//! from defaults, loaded from a TOML file, and overridden field by field by
//! the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default values used when neither the config file nor the CLI sets a field.
pub mod defaults {
    /// Export file produced by the document database dump.
    pub const INPUT_PATH: &str = "./tetris-leaderboard.json";

    /// Sorted-set key, also the collection name inside the export.
    pub const LEADERBOARD_KEY: &str = "tetris-leaderboard";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MigrationConfig {
    /// Connection URL including credentials (`redis://` or `rediss://`)
    pub redis_url: Option<String>,
    /// Path of the JSON export
    pub input: PathBuf,
    /// Destination sorted-set key
    pub key: String,
    /// Collection name inside the export, when it differs from `key`
    pub collection: Option<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            redis_url: None,
            input: PathBuf::from(defaults::INPUT_PATH),
            key: defaults::LEADERBOARD_KEY.to_string(),
            collection: None,
        }
    }
}

impl MigrationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Name of the collection to read from the export
    pub fn collection_name(&self) -> &str {
        self.collection.as_deref().unwrap_or(&self.key)
    }

    /// Connection URL, or an error if none was configured
    pub fn redis_url(&self) -> Result<&str> {
        self.redis_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config("no Redis URL configured".to_string()))
    }
}
