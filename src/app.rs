//! Grocery List Frontend App
//!
//! Opens the session's list once and provides it to every component.

use grocery_core::StoreConfig;
use leptos::prelude::*;

use crate::components::GroceryListPage;
use crate::context::GroceryListContext;
use crate::recipes::BundledRecipes;
use crate::storage::LocalStorageSlot;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    GroceryListContext::provide(LocalStorageSlot::new(config.storage_key));
    provide_context(StoredValue::new(BundledRecipes::load()));

    view! {
        <main class="app-layout">
            <GroceryListPage />
        </main>
    }
}
