//! Grocery List Aggregate
//!
//! The persisted state: manual lines and recipe lines, each in insertion order.

use serde::{Deserialize, Serialize};

use super::entity::{remove_in, retain_unchecked, toggle_in, Entity};
use super::grouping::{group_by_recipe, GroupedRecipeItems};
use super::item::{GroceryItem, ItemKind, RecipeGroceryItem};
use crate::error::StoreResult;

/// The whole grocery list as stored in the persistence slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListData {
    pub manual_items: Vec<GroceryItem>,
    pub recipe_items: Vec<RecipeGroceryItem>,
}

impl GroceryListData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the slot payload
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for the slot
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.manual_items.is_empty() && self.recipe_items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.manual_items.len() + self.recipe_items.len()
    }

    pub fn checked_count(&self) -> usize {
        self.manual_items.iter().filter(|item| item.checked).count()
            + self.recipe_items.iter().filter(|item| item.checked).count()
    }

    pub fn has_checked_items(&self) -> bool {
        self.manual_items.iter().any(Entity::is_checked)
            || self.recipe_items.iter().any(Entity::is_checked)
    }

    /// True if any line in either list uses `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.manual_items.iter().any(|item| item.id.as_str() == id)
            || self.recipe_items.iter().any(|item| item.id.as_str() == id)
    }

    /// Flip `checked` on a line in the selected list. Unknown ids are ignored.
    pub fn toggle(&mut self, id: &str, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Recipe => toggle_in(&mut self.recipe_items, id),
            ItemKind::Manual => toggle_in(&mut self.manual_items, id),
        }
    }

    /// Remove a line from the selected list. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str, kind: ItemKind) -> bool {
        match kind {
            ItemKind::Recipe => remove_in(&mut self.recipe_items, id),
            ItemKind::Manual => remove_in(&mut self.manual_items, id),
        }
    }

    /// Drop checked lines from both lists, returning how many went.
    pub fn clear_checked(&mut self) -> usize {
        retain_unchecked(&mut self.manual_items) + retain_unchecked(&mut self.recipe_items)
    }

    /// Empty both lists, returning how many lines went.
    pub fn clear(&mut self) -> usize {
        let removed = self.item_count();
        self.manual_items.clear();
        self.recipe_items.clear();
        removed
    }

    /// Recipe lines grouped by source recipe
    pub fn grouped_by_recipe(&self) -> GroupedRecipeItems {
        group_by_recipe(&self.recipe_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use crate::error::StoreError;

    fn sample() -> GroceryListData {
        GroceryListData {
            manual_items: vec![
                GroceryItem::new(ItemId::from("m1"), "eggs"),
                GroceryItem::new(ItemId::from("m2"), "milk"),
            ],
            recipe_items: vec![RecipeGroceryItem::new(ItemId::from("r-1"), "flour", "r1", "Bread")],
        }
    }

    #[test]
    fn test_toggle_only_touches_selected_list() {
        let mut data = sample();
        assert!(!data.toggle("m1", ItemKind::Recipe));
        assert!(data.toggle("m1", ItemKind::Manual));
        assert!(data.manual_items[0].checked);
        assert!(!data.recipe_items[0].checked);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut data = sample();
        let before = data.clone();
        assert!(!data.remove("missing", ItemKind::Manual));
        assert_eq!(data, before);
    }

    #[test]
    fn test_clear_checked_spans_both_lists() {
        let mut data = sample();
        data.toggle("m2", ItemKind::Manual);
        data.toggle("r-1", ItemKind::Recipe);
        assert_eq!(data.checked_count(), 2);
        assert_eq!(data.clear_checked(), 2);
        assert_eq!(data.manual_items.len(), 1);
        assert!(data.recipe_items.is_empty());
        assert!(!data.has_checked_items());
    }

    #[test]
    fn test_missing_slot_fields_are_rejected() {
        assert!(matches!(
            GroceryListData::from_json(r#"{"manualItems": []}"#),
            Err(StoreError::Serialization(_))
        ));
        assert!(matches!(
            GroceryListData::from_json("not json"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"manualItems\""));
        assert!(json.contains("\"recipeItems\""));
        assert_eq!(GroceryListData::from_json(&json).unwrap(), sample());
    }
}
