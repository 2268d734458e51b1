//! UI Components
//!
//! Grocery list views built on the shared list context.

mod add_items_form;
mod grocery_item_row;
mod grocery_list_page;
mod recipe_group_section;
mod recipe_ingredients;

pub use add_items_form::AddItemsForm;
pub use grocery_item_row::GroceryItemRow;
pub use grocery_list_page::GroceryListPage;
pub use recipe_group_section::RecipeGroupSection;
pub use recipe_ingredients::RecipePicker;
