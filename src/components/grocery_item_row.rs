//! Grocery Item Row Component
//!
//! One line of the list: checkbox, text, remove button.

use grocery_core::{ItemId, ItemKind};
use leptos::prelude::*;

use crate::context::use_grocery_list;

/// A single grocery line
#[component]
pub fn GroceryItemRow(
    item_id: ItemId,
    text: String,
    checked: bool,
    kind: ItemKind,
) -> impl IntoView {
    let list = use_grocery_list();

    let toggle_id = item_id.clone();
    let remove_id = item_id;

    view! {
        <li class=if checked { "grocery-item checked" } else { "grocery-item" }>
            <input
                type="checkbox"
                checked=checked
                on:change=move |_| list.toggle_item(toggle_id.as_str(), kind)
            />
            <span class="item-text">{text}</span>
            <button
                class="remove-btn"
                title="Remove"
                on:click=move |_| list.remove_item(remove_id.as_str(), kind)
            >
                "×"
            </button>
        </li>
    }
}
