//! Recipe data consumed by the grocery list
//!
//! Only the fields needed to turn a recipe's ingredients into list lines.
//! The store never fetches recipes; callers format lines and pass them in.

use serde::{Deserialize, Serialize};

/// Fallback label for a linked recipe whose name was not joined in
pub const LINKED_RECIPE_FALLBACK: &str = "Linked Recipe";

/// Minimal recipe reference (id and display name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    pub id: String,
    pub name: String,
}

/// One ingredient row of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub recipe_id: String,
    pub item: Option<String>,
    pub amount: Option<String>,
    pub unit: Option<String>,
    /// Set when this ingredient is another recipe
    pub linked_recipe_id: Option<String>,
    pub sort_order: i32,
    /// Joined data for `linked_recipe_id`
    #[serde(default)]
    pub linked_recipe: Option<RecipeRef>,
}

/// A recipe with its ingredient rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeWithIngredients {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

/// Recipe data provider (hosted backend, flat-file server, fixtures)
pub trait RecipeSource {
    type Error: std::error::Error;

    /// Fetch a recipe with its ingredients, `None` if it does not exist
    fn get_recipe(&self, id: &str) -> Result<Option<RecipeWithIngredients>, Self::Error>;
}

fn non_blank(part: &Option<String>) -> Option<&str> {
    part.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Format an ingredient as `<amount> <unit> <item>`, skipping empty parts.
///
/// Linked-recipe ingredients use the linked recipe's name in place of `item`.
pub fn format_ingredient(ingredient: &Ingredient) -> String {
    let name = if ingredient.linked_recipe_id.is_some() {
        Some(
            ingredient
                .linked_recipe
                .as_ref()
                .map(|linked| linked.name.trim())
                .filter(|name| !name.is_empty())
                .unwrap_or(LINKED_RECIPE_FALLBACK),
        )
    } else {
        non_blank(&ingredient.item)
    };

    [non_blank(&ingredient.amount), non_blank(&ingredient.unit), name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formatted lines for every ingredient, in `sort_order`
pub fn ingredient_lines(recipe: &RecipeWithIngredients) -> Vec<String> {
    let mut ingredients: Vec<&Ingredient> = recipe.ingredients.iter().collect();
    ingredients.sort_by_key(|ingredient| ingredient.sort_order);
    ingredients.into_iter().map(format_ingredient).collect()
}
