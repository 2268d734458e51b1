//! Reactive Grocery State
//!
//! Mirror of the core list in a Leptos reactive_stores store, so components
//! re-render per field.

use grocery_core::{GroceryItem, GroceryListData, RecipeGroceryItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// Reactive copy of the persisted list
#[derive(Clone, Debug, Default, Store)]
pub struct GroceryState {
    /// Lines typed in by the user
    pub manual_items: Vec<GroceryItem>,
    /// Lines pulled from recipes, insertion order
    pub recipe_items: Vec<RecipeGroceryItem>,
}

impl From<&GroceryListData> for GroceryState {
    fn from(data: &GroceryListData) -> Self {
        Self {
            manual_items: data.manual_items.clone(),
            recipe_items: data.recipe_items.clone(),
        }
    }
}

/// Type alias for the store
pub type GroceryStore = Store<GroceryState>;

/// Copy changed fields of the core list into the reactive store
pub fn store_sync(store: &GroceryStore, data: &GroceryListData) {
    if store.manual_items().with_untracked(|items| items != &data.manual_items) {
        *store.manual_items().write() = data.manual_items.clone();
    }
    if store.recipe_items().with_untracked(|items| items != &data.recipe_items) {
        *store.recipe_items().write() = data.recipe_items.clone();
    }
}
