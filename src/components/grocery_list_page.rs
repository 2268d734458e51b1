//! Grocery List Page Component
//!
//! Manual items first, then one section per recipe in first-added order.

use grocery_core::ItemKind;
use leptos::prelude::*;

use crate::components::{AddItemsForm, GroceryItemRow, RecipeGroupSection, RecipePicker};
use crate::context::use_grocery_list;
use crate::recipes::BundledRecipes;

#[component]
pub fn GroceryListPage() -> impl IntoView {
    let list = use_grocery_list();
    let recipes = expect_context::<StoredValue<BundledRecipes>>();

    view! {
        <div class="grocery-page">
            <h1>"Grocery List"</h1>

            <AddItemsForm />
            <RecipePicker recipes=recipes />

            <Show when=move || !list.has_items()>
                <p class="empty-message">
                    "Your grocery list is empty. Add items above or add ingredients from recipes."
                </p>
            </Show>

            <Show when=move || list.has_manual_items()>
                <section class="grocery-section">
                    <h2 class="section-header">"My Items"</h2>
                    <ul class="item-list">
                        <For
                            each=move || list.manual_items()
                            key=|item| (item.id.clone(), item.checked)
                            children=move |item| {
                                view! {
                                    <GroceryItemRow
                                        item_id=item.id
                                        text=item.text
                                        checked=item.checked
                                        kind=ItemKind::Manual
                                    />
                                }
                            }
                        />
                    </ul>
                </section>
            </Show>

            {move || {
                list.recipe_items_grouped()
                    .into_values()
                    .map(|group| view! { <RecipeGroupSection group=group /> })
                    .collect_view()
            }}
        </div>
    }
}
