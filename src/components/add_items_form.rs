//! Add Items Form Component
//!
//! Textarea for typing several items at once, one per line, plus the bulk
//! clear buttons.

use leptos::prelude::*;

use crate::context::use_grocery_list;

/// Form for adding manual items
#[component]
pub fn AddItemsForm() -> impl IntoView {
    let list = use_grocery_list();

    let (input_text, set_input_text) = signal(String::new());

    let add_items = move |_| {
        let text = input_text.get();
        list.add_manual_items(text.split('\n').map(str::to_string).collect());
        set_input_text.set(String::new());
    };

    view! {
        <div class="input-section">
            <textarea
                placeholder="Add items, one per line..."
                prop:value=move || input_text.get()
                on:input=move |ev| set_input_text.set(event_target_value(&ev))
            ></textarea>

            <div class="button-row">
                <button
                    on:click=add_items
                    disabled=move || input_text.get().trim().is_empty()
                >
                    "Add Items"
                </button>
                <Show when=move || list.has_checked_items()>
                    <button class="secondary-btn" on:click=move |_| list.clear_checked()>
                        "Clear Checked"
                    </button>
                </Show>
                <Show when=move || list.has_items()>
                    <button class="secondary-btn" on:click=move |_| list.clear_all()>
                        "Clear All"
                    </button>
                </Show>
            </div>
        </div>
    }
}
