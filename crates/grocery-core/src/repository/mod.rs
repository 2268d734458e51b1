//! Repository Layer
//!
//! Persistence port and its adapters.

mod memory;
mod traits;
#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemorySlot;
pub use traits::ListSlot;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSlot;
