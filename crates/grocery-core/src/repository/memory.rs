//! In-memory slot
//!
//! Clones share the same cell, so a second store opened on a clone sees what
//! the first one saved.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::traits::ListSlot;
use crate::error::{StoreError, StoreResult};

#[derive(Debug, Default)]
struct Inner {
    contents: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

/// Slot backed by memory, used in tests and when no storage exists
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    inner: Rc<Inner>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with a raw payload
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        *slot.inner.contents.borrow_mut() = Some(contents.into());
        slot
    }

    /// Current raw payload
    pub fn contents(&self) -> Option<String> {
        self.inner.contents.borrow().clone()
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.inner.writes.get()
    }

    /// Make subsequent saves fail, as a full storage quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }
}

impl ListSlot for MemorySlot {
    fn load(&self) -> StoreResult<Option<String>> {
        Ok(self.contents())
    }

    fn save(&self, contents: &str) -> StoreResult<()> {
        if self.inner.fail_writes.get() {
            return Err(StoreError::Write("quota exceeded".to_string()));
        }
        *self.inner.contents.borrow_mut() = Some(contents.to_string());
        self.inner.writes.set(self.inner.writes.get() + 1);
        Ok(())
    }
}
