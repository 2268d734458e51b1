//! Grocery List Store
//!
//! Owns the list for one session. Every effective change is written to the
//! slot before the call returns; storage failures are logged and the
//! in-memory list stays authoritative.

use crate::domain::{
    GroceryItem, GroceryListData, GroupedRecipeItems, IdGenerator, ItemId, ItemKind,
    RecipeGroceryItem, TimestampIdGenerator,
};
use crate::repository::ListSlot;

/// Handle returned by [`GroceryListStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(&GroceryListData)>;

/// Read the slot, falling back to an empty list when it is missing,
/// unreadable or corrupt.
pub fn load<S: ListSlot + ?Sized>(slot: &S) -> GroceryListData {
    match slot.load() {
        Ok(Some(raw)) => match GroceryListData::from_json(&raw) {
            Ok(data) => {
                log::debug!(
                    "Loaded grocery list: {} manual, {} recipe items",
                    data.manual_items.len(),
                    data.recipe_items.len()
                );
                data
            }
            Err(e) => {
                log::error!("Failed to parse grocery list, starting empty: {}", e);
                GroceryListData::default()
            }
        },
        Ok(None) => GroceryListData::default(),
        Err(e) => {
            log::error!("Failed to read grocery list, starting empty: {}", e);
            GroceryListData::default()
        }
    }
}

/// The session's grocery list
pub struct GroceryListStore<S, G = TimestampIdGenerator> {
    slot: S,
    ids: G,
    data: GroceryListData,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl<S: ListSlot> GroceryListStore<S> {
    /// Open the store on a slot, loading whatever it holds
    pub fn open(slot: S) -> Self {
        Self::with_id_generator(slot, TimestampIdGenerator::new())
    }
}

impl<S: ListSlot, G: IdGenerator> GroceryListStore<S, G> {
    pub fn with_id_generator(slot: S, ids: G) -> Self {
        let data = load(&slot);
        log::info!(
            "Grocery list opened with {} items ({} checked)",
            data.item_count(),
            data.checked_count()
        );
        Self {
            slot,
            ids,
            data,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // ========================
    // Queries
    // ========================

    pub fn data(&self) -> &GroceryListData {
        &self.data
    }

    pub fn manual_items(&self) -> &[GroceryItem] {
        &self.data.manual_items
    }

    pub fn recipe_items(&self) -> &[RecipeGroceryItem] {
        &self.data.recipe_items
    }

    /// Recipe lines grouped by recipe, recomputed on every call
    pub fn grouped_by_recipe(&self) -> GroupedRecipeItems {
        self.data.grouped_by_recipe()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_items(&self) -> bool {
        !self.data.is_empty()
    }

    pub fn has_checked_items(&self) -> bool {
        self.data.has_checked_items()
    }

    pub fn item_count(&self) -> usize {
        self.data.item_count()
    }

    pub fn checked_count(&self) -> usize {
        self.data.checked_count()
    }

    // ========================
    // Mutations
    // ========================

    /// Add typed lines. Lines are trimmed and blank ones dropped; if nothing
    /// is left the list and the slot are untouched.
    pub fn add_manual_items<I, T>(&mut self, lines: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let texts = non_blank_lines(lines);
        if texts.is_empty() {
            return;
        }
        for text in &texts {
            let id = self.fresh_id();
            self.data.manual_items.push(GroceryItem::new(id, text));
        }
        log::debug!("Added {} manual items", texts.len());
        self.commit();
    }

    /// Add one recipe line.
    ///
    /// Unlike the bulk adds, blank text is not filtered here: an empty line
    /// is stored as given (after trimming).
    pub fn add_recipe_ingredient(&mut self, text: &str, recipe_id: &str, recipe_name: &str) {
        let id = self.fresh_id();
        self.data
            .recipe_items
            .push(RecipeGroceryItem::new(id, text, recipe_id, recipe_name));
        self.commit();
    }

    /// Add every non-blank line of a recipe, in order
    pub fn add_all_recipe_ingredients<I, T>(
        &mut self,
        lines: I,
        recipe_id: &str,
        recipe_name: &str,
    ) where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let texts = non_blank_lines(lines);
        if texts.is_empty() {
            return;
        }
        for text in &texts {
            let id = self.fresh_id();
            self.data
                .recipe_items
                .push(RecipeGroceryItem::new(id, text, recipe_id, recipe_name));
        }
        log::debug!("Added {} items from recipe {}", texts.len(), recipe_id);
        self.commit();
    }

    /// Flip `checked` on a line. Unknown ids are ignored.
    pub fn toggle_item(&mut self, id: &str, kind: ItemKind) {
        if self.data.toggle(id, kind) {
            self.commit();
        }
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &str, kind: ItemKind) {
        if self.data.remove(id, kind) {
            self.commit();
        }
    }

    /// Remove every checked line from both lists
    pub fn clear_checked(&mut self) {
        let removed = self.data.clear_checked();
        if removed > 0 {
            log::debug!("Cleared {} checked items", removed);
            self.commit();
        }
    }

    /// Empty both lists
    pub fn clear_all(&mut self) {
        if self.data.clear() > 0 {
            self.commit();
        }
    }

    /// Discard in-memory state and read the slot again
    pub fn reload(&mut self) {
        self.data = load(&self.slot);
        self.notify();
    }

    // ========================
    // Change notification
    // ========================

    /// Call `listener` with the new list after every effective change
    pub fn subscribe(&mut self, listener: impl FnMut(&GroceryListData) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // ========================
    // Internals
    // ========================

    /// Next id not used by any line currently in the list
    fn fresh_id(&mut self) -> ItemId {
        loop {
            let id = self.ids.next_id();
            if !self.data.contains_id(id.as_str()) {
                return id;
            }
            log::warn!("Generated id {} already in use, retrying", id);
        }
    }

    fn commit(&mut self) {
        self.persist();
        self.notify();
    }

    fn persist(&self) {
        let json = match self.data.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize grocery list: {}", e);
                return;
            }
        };
        if let Err(e) = self.slot.save(&json) {
            log::error!("Failed to persist grocery list: {}", e);
        }
    }

    fn notify(&mut self) {
        let data = &self.data;
        for (_, listener) in self.listeners.iter_mut() {
            listener(data);
        }
    }
}

fn non_blank_lines<I, T>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
