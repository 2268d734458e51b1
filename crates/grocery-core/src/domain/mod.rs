//! Domain Layer
//!
//! Grocery list entities and pure list operations.
//! Nothing here touches storage.

mod entity;
mod grouping;
mod id;
mod item;
mod list;
mod recipe;

pub use entity::Entity;
pub use grouping::{group_by_recipe, GroupedRecipeItems, RecipeGroup};
pub use id::{IdGenerator, TimestampIdGenerator};
pub use item::{GroceryItem, ItemId, ItemKind, RecipeGroceryItem};
pub use list::GroceryListData;
pub use recipe::{
    format_ingredient, ingredient_lines, Ingredient, RecipeRef, RecipeSource,
    RecipeWithIngredients, LINKED_RECIPE_FALLBACK,
};
