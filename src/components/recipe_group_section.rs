//! Recipe Group Section Component

use grocery_core::{ItemKind, RecipeGroup};
use leptos::prelude::*;

use crate::components::GroceryItemRow;

/// Lines that came from one recipe, under the recipe's captured name
#[component]
pub fn RecipeGroupSection(group: RecipeGroup) -> impl IntoView {
    let RecipeGroup { recipe_name, items } = group;

    view! {
        <section class="grocery-section">
            <h2 class="section-header">"From: " {recipe_name}</h2>
            <ul class="item-list">
                {items.into_iter().map(|item| view! {
                    <GroceryItemRow
                        item_id=item.id
                        text=item.text
                        checked=item.checked
                        kind=ItemKind::Recipe
                    />
                }).collect_view()}
            </ul>
        </section>
    }
}
