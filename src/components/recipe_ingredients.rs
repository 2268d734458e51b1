//! Recipe Ingredients Component
//!
//! Picks a bundled recipe and lists its formatted ingredients, each with an
//! add button, plus "Add All to Grocery List".

use grocery_core::{ingredient_lines, RecipeSource, RecipeWithIngredients};
use leptos::prelude::*;

use crate::context::use_grocery_list;
use crate::recipes::BundledRecipes;

/// Recipe selector feeding the grocery list
#[component]
pub fn RecipePicker(recipes: StoredValue<BundledRecipes>) -> impl IntoView {
    let names = recipes.with_value(BundledRecipes::names);
    let (selected, set_selected) = signal(String::new());

    let recipe = move || {
        let id = selected.get();
        if id.is_empty() {
            return None;
        }
        recipes.with_value(|source| source.get_recipe(&id).ok().flatten())
    };

    view! {
        <section class="recipe-picker">
            <h2 class="section-header">"Recipes"</h2>
            <select on:change=move |ev| set_selected.set(event_target_value(&ev))>
                <option value="">"Choose a recipe..."</option>
                {names
                    .into_iter()
                    .map(|(id, name)| view! { <option value=id>{name}</option> })
                    .collect_view()}
            </select>
            {move || recipe().map(|recipe| view! { <RecipeIngredients recipe=recipe /> })}
        </section>
    }
}

/// One recipe's ingredient lines with add buttons
#[component]
pub fn RecipeIngredients(recipe: RecipeWithIngredients) -> impl IntoView {
    let list = use_grocery_list();
    let lines = ingredient_lines(&recipe);
    let has_lines = !lines.is_empty();
    let recipe = StoredValue::new(recipe);

    let add_all = move |_| recipe.with_value(|recipe| list.add_recipe(recipe));

    view! {
        <div class="recipe-ingredients">
            <Show when=move || has_lines>
                <button class="add-all-btn" on:click=add_all>
                    "Add All to Grocery List"
                </button>
            </Show>
            <ul class="ingredient-list">
                {lines
                    .into_iter()
                    .map(|line| {
                        let text = line.clone();
                        let add_one = move |_| {
                            recipe.with_value(|recipe| {
                                list.add_recipe_ingredient(&text, &recipe.id, &recipe.name)
                            })
                        };
                        view! {
                            <li class="ingredient-item">
                                <span>{line}</span>
                                <button class="add-btn" title="Add to grocery list" on:click=add_one>
                                    "+"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
