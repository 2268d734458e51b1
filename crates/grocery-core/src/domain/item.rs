//! Grocery Item Entities
//!
//! A grocery line is either typed in by hand or pulled from a recipe.
//! Recipe lines carry the recipe's id and the name it had when added.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Opaque, unique identifier of a grocery line
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which list a line lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Typed in by the user
    Manual,
    /// Generated from a recipe's ingredients
    Recipe,
}

impl ItemKind {
    /// Map the `isRecipeItem` flag used by list consumers
    pub fn from_recipe_flag(is_recipe_item: bool) -> Self {
        if is_recipe_item {
            ItemKind::Recipe
        } else {
            ItemKind::Manual
        }
    }
}

/// A single shopping-list line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier
    pub id: ItemId,
    /// Display text, e.g. "2 cups flour"
    pub text: String,
    /// Ticked off by the user
    pub checked: bool,
}

impl GroceryItem {
    /// Create an unchecked line. Text is trimmed.
    pub fn new(id: ItemId, text: &str) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            checked: false,
        }
    }
}

impl Entity for GroceryItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// A shopping-list line tagged with the recipe it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGroceryItem {
    pub id: ItemId,
    pub text: String,
    pub checked: bool,
    /// Source recipe
    pub recipe_id: String,
    /// Recipe name captured at insertion time; never refreshed
    pub recipe_name: String,
}

impl RecipeGroceryItem {
    /// Create an unchecked recipe line. Text is trimmed.
    pub fn new(id: ItemId, text: &str, recipe_id: &str, recipe_name: &str) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            checked: false,
            recipe_id: recipe_id.to_string(),
            recipe_name: recipe_name.to_string(),
        }
    }
}

impl Entity for RecipeGroceryItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}
