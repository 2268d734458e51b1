//! File slot
//!
//! Stores the list as a JSON file. Writes go to a temporary sibling and are
//! renamed into place so a crash never leaves a half-written list.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::traits::ListSlot;
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Slot backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot at the file the config resolves to
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Ok(Self::new(config.file_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ListSlot for FileSlot {
    fn load(&self) -> StoreResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }

    fn save(&self, contents: &str) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.temp_path();
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
