//! Grocery List Core
//!
//! Layered architecture:
//! - domain: grocery lines, the list aggregate, grouping, recipe formatting
//! - repository: persistence port and slot adapters
//! - store: the session's list, persisting every change

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use domain::{
    format_ingredient, group_by_recipe, ingredient_lines, GroceryItem, GroceryListData,
    GroupedRecipeItems, IdGenerator, Ingredient, ItemId, ItemKind, RecipeGroceryItem,
    RecipeGroup, RecipeSource, RecipeWithIngredients, TimestampIdGenerator,
};
pub use error::{StoreError, StoreResult};
#[cfg(not(target_arch = "wasm32"))]
pub use repository::FileSlot;
pub use repository::{ListSlot, MemorySlot};
pub use store::{GroceryListStore, ListenerId};
