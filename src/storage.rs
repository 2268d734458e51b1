//! Browser localStorage slot
//!
//! Persists the grocery list under one `localStorage` key.

use grocery_core::{ListSlot, StoreError, StoreResult};

/// Slot backed by `window.localStorage`
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> StoreResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl ListSlot for LocalStorageSlot {
    fn load(&self) -> StoreResult<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn save(&self, contents: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(&self.key, contents)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
