//! Grocery List Context
//!
//! The session's list, constructed once in `App` and provided via the Leptos
//! Context API. Components call the methods here; every change is persisted
//! by the core store and mirrored into the reactive state.

use grocery_core::{
    group_by_recipe, ingredient_lines, GroceryItem, GroceryListStore, GroupedRecipeItems,
    ItemKind, ListSlot, RecipeWithIngredients,
};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::store::{store_sync, GroceryState, GroceryStateStoreFields, GroceryStore};

type SessionList = GroceryListStore<Box<dyn ListSlot>>;

/// Handle to the grocery list shared by all components
#[derive(Clone, Copy)]
pub struct GroceryListContext {
    list: StoredValue<SessionList, LocalStorage>,
    state: GroceryStore,
}

impl GroceryListContext {
    /// Open the list on `slot`
    pub fn new(slot: impl ListSlot + 'static) -> Self {
        let slot: Box<dyn ListSlot> = Box::new(slot);
        let list = GroceryListStore::open(slot);
        let state = Store::new(GroceryState::from(list.data()));

        Self {
            list: StoredValue::new_local(list),
            state,
        }
    }

    /// Open the list and provide it to all children
    pub fn provide(slot: impl ListSlot + 'static) -> Self {
        let ctx = Self::new(slot);
        provide_context(ctx);
        ctx
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn manual_items(&self) -> Vec<GroceryItem> {
        self.state.manual_items().get()
    }

    /// Recipe lines grouped by recipe, derived on every read
    pub fn recipe_items_grouped(&self) -> GroupedRecipeItems {
        self.state.recipe_items().with(|items| group_by_recipe(items))
    }

    pub fn has_items(&self) -> bool {
        self.state.manual_items().with(|items| !items.is_empty())
            || self.state.recipe_items().with(|items| !items.is_empty())
    }

    pub fn has_manual_items(&self) -> bool {
        self.state.manual_items().with(|items| !items.is_empty())
    }

    pub fn has_checked_items(&self) -> bool {
        self.state.manual_items().with(|items| items.iter().any(|i| i.checked))
            || self.state.recipe_items().with(|items| items.iter().any(|i| i.checked))
    }

    // ========================
    // Mutations
    // ========================

    pub fn add_manual_items(&self, lines: Vec<String>) {
        self.mutate(|list| list.add_manual_items(lines));
    }

    pub fn add_recipe_ingredient(&self, text: &str, recipe_id: &str, recipe_name: &str) {
        self.mutate(|list| list.add_recipe_ingredient(text, recipe_id, recipe_name));
    }

    pub fn add_all_recipe_ingredients(
        &self,
        lines: Vec<String>,
        recipe_id: &str,
        recipe_name: &str,
    ) {
        self.mutate(|list| list.add_all_recipe_ingredients(lines, recipe_id, recipe_name));
    }

    /// Add every ingredient of `recipe`, formatted and in sort order
    pub fn add_recipe(&self, recipe: &RecipeWithIngredients) {
        self.add_all_recipe_ingredients(ingredient_lines(recipe), &recipe.id, &recipe.name);
    }

    pub fn toggle_item(&self, id: &str, kind: ItemKind) {
        self.mutate(|list| list.toggle_item(id, kind));
    }

    pub fn remove_item(&self, id: &str, kind: ItemKind) {
        self.mutate(|list| list.remove_item(id, kind));
    }

    pub fn clear_checked(&self) {
        self.mutate(|list| list.clear_checked());
    }

    pub fn clear_all(&self) {
        self.mutate(|list| list.clear_all());
    }

    /// Run a change on the core list, then mirror it. The reactive write
    /// happens after the stored value is released.
    fn mutate(&self, change: impl FnOnce(&mut SessionList)) {
        self.list.update_value(change);
        let data = self.list.with_value(|list| list.data().clone());
        store_sync(&self.state, &data);
    }
}

/// Get the grocery list from context
pub fn use_grocery_list() -> GroceryListContext {
    expect_context::<GroceryListContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::BundledRecipes;
    use grocery_core::{GroceryListData, MemorySlot, RecipeSource};

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(test);
    }

    #[test]
    fn test_state_starts_from_slot() {
        with_owner(|| {
            let slot = MemorySlot::with_contents(
                r#"{"manualItems":[{"id":"1-a","text":"eggs","checked":true}],"recipeItems":[]}"#,
            );
            let ctx = GroceryListContext::new(slot);
            assert_eq!(ctx.manual_items().len(), 1);
            assert!(ctx.has_items());
            assert!(ctx.has_checked_items());
        });
    }

    #[test]
    fn test_mutations_reach_reactive_state_and_slot() {
        with_owner(|| {
            let slot = MemorySlot::new();
            let ctx = GroceryListContext::new(slot.clone());

            ctx.add_manual_items(vec!["  eggs ".to_string(), String::new()]);
            ctx.add_all_recipe_ingredients(
                vec!["2 cups flour".to_string(), "1 tsp salt".to_string()],
                "r1",
                "Bread",
            );

            let manual = ctx.manual_items();
            assert_eq!(manual.len(), 1);
            assert_eq!(manual[0].text, "eggs");

            let groups = ctx.recipe_items_grouped();
            assert_eq!(groups["r1"].items.len(), 2);

            let persisted = GroceryListData::from_json(&slot.contents().unwrap()).unwrap();
            assert_eq!(persisted.manual_items, manual);
            assert_eq!(persisted.recipe_items.len(), 2);
        });
    }

    #[test]
    fn test_toggle_and_clear_checked() {
        with_owner(|| {
            let ctx = GroceryListContext::new(MemorySlot::new());
            ctx.add_recipe_ingredient("flour", "r1", "Bread");
            let id = ctx.recipe_items_grouped()["r1"].items[0].id.clone();

            ctx.toggle_item(id.as_str(), ItemKind::Recipe);
            assert!(ctx.has_checked_items());
            ctx.clear_checked();
            assert!(!ctx.has_items());
        });
    }

    #[test]
    fn test_add_recipe_groups_under_recipe_name() {
        with_owner(|| {
            let ctx = GroceryListContext::new(MemorySlot::new());
            let recipes = BundledRecipes::load();
            let pizza = recipes.get_recipe("margherita").unwrap().unwrap();

            ctx.add_recipe(&pizza);
            ctx.add_recipe_ingredient("2 eggs", "pancakes", "Pancakes");

            let groups = ctx.recipe_items_grouped();
            assert_eq!(groups.len(), 2);
            let texts: Vec<_> = groups["margherita"]
                .items
                .iter()
                .map(|item| item.text.as_str())
                .collect();
            assert_eq!(groups["margherita"].recipe_name, "Margherita Pizza");
            assert_eq!(texts[0], "1 batch Pizza Dough");
            assert_eq!(texts.len(), 4);
            assert_eq!(groups["pancakes"].items[0].text, "2 eggs");
        });
    }

    #[test]
    fn test_remove_and_clear_all() {
        with_owner(|| {
            let ctx = GroceryListContext::new(MemorySlot::new());
            ctx.add_manual_items(vec!["eggs".to_string(), "milk".to_string()]);
            let eggs = ctx.manual_items()[0].id.clone();

            ctx.remove_item("unknown", ItemKind::Manual);
            ctx.remove_item(eggs.as_str(), ItemKind::Manual);
            assert_eq!(ctx.manual_items().len(), 1);

            ctx.clear_all();
            assert!(ctx.manual_items().is_empty());
        });
    }
}
