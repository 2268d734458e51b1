//! Recipe grouping
//!
//! Recipe lines clustered by source recipe. Always derived from the flat
//! recipe list, never stored.

use indexmap::IndexMap;
use serde::Serialize;

use super::item::RecipeGroceryItem;

/// Lines from one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeGroup {
    /// Name captured on the first line seen for this recipe
    pub recipe_name: String,
    pub items: Vec<RecipeGroceryItem>,
}

/// Recipe id to group, in first-seen order
pub type GroupedRecipeItems = IndexMap<String, RecipeGroup>;

/// Fold recipe lines into groups keyed by recipe id.
///
/// Recipe order is first appearance; line order within a group is insertion
/// order.
pub fn group_by_recipe(items: &[RecipeGroceryItem]) -> GroupedRecipeItems {
    items.iter().fold(IndexMap::new(), |mut groups, item| {
        groups
            .entry(item.recipe_id.clone())
            .or_insert_with(|| RecipeGroup {
                recipe_name: item.recipe_name.clone(),
                items: Vec::new(),
            })
            .items
            .push(item.clone());
        groups
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;

    fn line(id: &str, recipe_id: &str, recipe_name: &str) -> RecipeGroceryItem {
        RecipeGroceryItem::new(ItemId::from(id), id, recipe_id, recipe_name)
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        assert!(group_by_recipe(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_recipe_order() {
        let items = vec![
            line("a", "r2", "Soup"),
            line("b", "r1", "Bread"),
            line("c", "r2", "Soup"),
        ];
        let groups = group_by_recipe(&items);
        let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["r2", "r1"]);

        let soup: Vec<&str> = groups["r2"].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(soup, vec!["a", "c"]);
    }

    #[test]
    fn test_group_name_comes_from_first_line() {
        let items = vec![line("a", "r1", "Bread"), line("b", "r1", "Sourdough")];
        let groups = group_by_recipe(&items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["r1"].recipe_name, "Bread");
        assert_eq!(groups["r1"].items[1].recipe_name, "Sourdough");
    }
}
