//! Property tests for list invariants

use std::collections::HashSet;

use grocery_core::{GroceryListData, GroceryListStore, ItemKind, MemorySlot};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddManual(Vec<String>),
    AddRecipe(String, u8),
    AddAllRecipe(Vec<String>, u8),
    Toggle(usize, bool),
    Remove(usize, bool),
    ClearChecked,
    ClearAll,
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[ a-z0-9]{1,12}",
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::collection::vec(line(), 0..4).prop_map(Op::AddManual),
        (line(), 0u8..3).prop_map(|(text, recipe)| Op::AddRecipe(text, recipe)),
        (prop::collection::vec(line(), 0..4), 0u8..3)
            .prop_map(|(lines, recipe)| Op::AddAllRecipe(lines, recipe)),
        (any::<usize>(), any::<bool>()).prop_map(|(i, r)| Op::Toggle(i, r)),
        (any::<usize>(), any::<bool>()).prop_map(|(i, r)| Op::Remove(i, r)),
        Just(Op::ClearChecked),
        Just(Op::ClearAll),
    ]
}

fn pick_id(store: &GroceryListStore<MemorySlot>, index: usize, recipe: bool) -> Option<String> {
    if recipe {
        let items = store.recipe_items();
        (!items.is_empty()).then(|| items[index % items.len()].id.to_string())
    } else {
        let items = store.manual_items();
        (!items.is_empty()).then(|| items[index % items.len()].id.to_string())
    }
}

fn apply(store: &mut GroceryListStore<MemorySlot>, op: &Op) {
    match op {
        Op::AddManual(lines) => store.add_manual_items(lines),
        Op::AddRecipe(text, recipe) => store.add_recipe_ingredient(
            text,
            &format!("r{}", recipe),
            &format!("Recipe {}", recipe),
        ),
        Op::AddAllRecipe(lines, recipe) => store.add_all_recipe_ingredients(
            lines,
            &format!("r{}", recipe),
            &format!("Recipe {}", recipe),
        ),
        Op::Toggle(index, recipe) => {
            if let Some(id) = pick_id(store, *index, *recipe) {
                store.toggle_item(&id, ItemKind::from_recipe_flag(*recipe));
            }
        }
        Op::Remove(index, recipe) => {
            if let Some(id) = pick_id(store, *index, *recipe) {
                store.remove_item(&id, ItemKind::from_recipe_flag(*recipe));
            }
        }
        Op::ClearChecked => store.clear_checked(),
        Op::ClearAll => store.clear_all(),
    }
}

proptest! {
    #[test]
    fn prop_blank_manual_input_changes_nothing(
        ops in prop::collection::vec(op(), 0..20),
        blanks in prop::collection::vec(prop_oneof![Just(""), Just(" "), Just("\t\n")], 0..5),
    ) {
        let slot = MemorySlot::new();
        let mut store = GroceryListStore::open(slot.clone());
        for op in &ops {
            apply(&mut store, op);
        }
        let before = store.data().clone();
        let writes = slot.write_count();

        store.add_manual_items(&blanks);
        prop_assert_eq!(store.data(), &before);
        prop_assert_eq!(slot.write_count(), writes);
    }

    #[test]
    fn prop_ids_never_repeat(ops in prop::collection::vec(op(), 0..60)) {
        let mut store = GroceryListStore::open(MemorySlot::new());
        let mut seen = HashSet::new();
        for op in &ops {
            apply(&mut store, op);
            let current: Vec<String> = store
                .manual_items()
                .iter()
                .map(|i| i.id.to_string())
                .chain(store.recipe_items().iter().map(|i| i.id.to_string()))
                .collect();
            let unique: HashSet<&String> = current.iter().collect();
            prop_assert_eq!(unique.len(), current.len());
            seen.extend(current);
        }
        // every id ever issued was distinct: adding more can never collide with a removed one
        store.add_manual_items(["one more"]);
        let newest = store.manual_items().last().unwrap().id.to_string();
        prop_assert!(!seen.contains(&newest));
    }

    #[test]
    fn prop_grouping_partitions_recipe_items(ops in prop::collection::vec(op(), 0..40)) {
        let mut store = GroceryListStore::open(MemorySlot::new());
        for op in &ops {
            apply(&mut store, op);
        }
        let groups = store.grouped_by_recipe();
        let total: usize = groups.values().map(|g| g.items.len()).sum();
        prop_assert_eq!(total, store.recipe_items().len());
        for (recipe_id, group) in &groups {
            for item in &group.items {
                prop_assert_eq!(&item.recipe_id, recipe_id);
            }
        }
        let flattened: HashSet<String> = groups
            .values()
            .flat_map(|g| g.items.iter().map(|i| i.id.to_string()))
            .collect();
        prop_assert_eq!(flattened.len(), store.recipe_items().len());
    }

    #[test]
    fn prop_toggle_twice_is_identity(
        ops in prop::collection::vec(op(), 1..30),
        index in any::<usize>(),
        recipe in any::<bool>(),
    ) {
        let mut store = GroceryListStore::open(MemorySlot::new());
        for op in &ops {
            apply(&mut store, op);
        }
        if let Some(id) = pick_id(&store, index, recipe) {
            let before = store.data().clone();
            let kind = ItemKind::from_recipe_flag(recipe);
            store.toggle_item(&id, kind);
            prop_assert_ne!(store.data(), &before);
            store.toggle_item(&id, kind);
            prop_assert_eq!(store.data(), &before);
        }
    }

    #[test]
    fn prop_persisted_state_round_trips(ops in prop::collection::vec(op(), 0..40)) {
        let slot = MemorySlot::new();
        let mut store = GroceryListStore::open(slot.clone());
        for op in &ops {
            apply(&mut store, op);
        }
        let json = store.data().to_json().unwrap();
        prop_assert_eq!(&GroceryListData::from_json(&json).unwrap(), store.data());

        let reopened = GroceryListStore::open(slot);
        prop_assert_eq!(reopened.data(), store.data());
    }
}
