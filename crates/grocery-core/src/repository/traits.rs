//! Repository Layer - Persistence Port
//!
//! A slot is one named, durable key-value entry holding the serialized list.
//! Implementations can use a file, browser storage, memory, etc.

use crate::error::StoreResult;

/// Single durable entry holding the serialized grocery list
///
/// Read once when the store opens, overwritten wholesale on every change.
pub trait ListSlot {
    /// Read the raw payload, `None` if the slot was never written
    fn load(&self) -> StoreResult<Option<String>>;

    /// Replace the payload
    fn save(&self, contents: &str) -> StoreResult<()>;
}

impl<T: ListSlot + ?Sized> ListSlot for Box<T> {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, contents: &str) -> StoreResult<()> {
        (**self).save(contents)
    }
}

impl<T: ListSlot + ?Sized> ListSlot for &T {
    fn load(&self) -> StoreResult<Option<String>> {
        (**self).load()
    }

    fn save(&self, contents: &str) -> StoreResult<()> {
        (**self).save(contents)
    }
}
