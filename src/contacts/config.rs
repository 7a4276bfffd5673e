use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "contacts.config.json";
pub const DB_ENV_VAR: &str = "CONTACTS_DB";
const DEFAULT_DATA_FILE: &str = "db/contacts.json";

/// Configuration for the contact book, optionally stored in `contacts.config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Path of the JSON collection, relative to the working directory unless absolute
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Write the collection indented instead of on a single line
    #[serde(default)]
    pub pretty: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: false,
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ContactsError::Read {
            path: config_path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ContactsError::Parse {
            path: config_path,
            source,
        })
    }

    /// Load from `config_dir`, then let `CONTACTS_DB` override the data file
    pub fn resolve<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::load(config_dir)?;
        Ok(match std::env::var_os(DB_ENV_VAR) {
            Some(path) if !path.is_empty() => config.with_data_file(path),
            _ => config,
        })
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
