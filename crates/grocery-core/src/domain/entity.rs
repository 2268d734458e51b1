//! Domain Layer - Core Entry Trait
//!
//! Both kinds of grocery line share this contract so list operations
//! (toggle, remove, clear checked) are written once.

use super::ItemId;

/// Core trait for every grocery list line
pub trait Entity: Clone {
    /// Returns the line's unique identifier
    fn id(&self) -> &ItemId;

    /// Whether the line is ticked off
    fn is_checked(&self) -> bool;

    /// Flip the checked flag
    fn toggle(&mut self);
}

/// Flip `checked` on the entry with `id`. Returns `false` when nothing matched.
pub fn toggle_in<T: Entity>(entries: &mut [T], id: &str) -> bool {
    match entries.iter_mut().find(|entry| entry.id().as_str() == id) {
        Some(entry) => {
            entry.toggle();
            true
        }
        None => false,
    }
}

/// Remove the entry with `id`. Returns `false` when nothing matched.
pub fn remove_in<T: Entity>(entries: &mut Vec<T>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id().as_str() != id);
    entries.len() != before
}

/// Drop every checked entry, returning how many were removed.
pub fn retain_unchecked<T: Entity>(entries: &mut Vec<T>) -> usize {
    let before = entries.len();
    entries.retain(|entry| !entry.is_checked());
    before - entries.len()
}
