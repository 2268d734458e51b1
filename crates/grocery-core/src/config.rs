//! Store configuration
//!
//! Names the persistence slot and, for file-backed slots, where it lives.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

/// Default slot name, shared with the browser `localStorage` key
pub const DEFAULT_STORAGE_KEY: &str = "grocery-list";

/// Environment variable overriding the slot name
pub const ENV_STORAGE_KEY: &str = "GROCERY_LIST_KEY";

/// Environment variable naming the directory for file-backed slots
pub const ENV_DATA_DIR: &str = "GROCERY_LIST_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name of the persistence slot
    pub storage_key: String,
    /// Directory holding file-backed slots (current directory if unset)
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Defaults overridden by `GROCERY_LIST_KEY` / `GROCERY_LIST_DIR`
    pub fn from_env() -> StoreResult<Self> {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(ENV_STORAGE_KEY) {
            config.storage_key = key;
        }
        if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Reject keys that cannot name a slot
    pub fn validate(&self) -> StoreResult<()> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(StoreError::Config("storage key must not be empty".to_string()));
        }
        if key.contains(['/', '\\']) {
            return Err(StoreError::Config(format!(
                "storage key must not contain path separators: {}",
                self.storage_key
            )));
        }
        Ok(())
    }

    /// `<data_dir>/<storage_key>.json`
    pub fn file_path(&self) -> StoreResult<PathBuf> {
        self.validate()?;
        let dir = self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join(format!("{}.json", self.storage_key.trim())))
    }
}
