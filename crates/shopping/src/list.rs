use serde::{Deserialize, Serialize};
use sofreh_kitchen::Dish;
use tracing::debug;

/// The household shopping list.
///
/// Always mirrors the ingredient list of the last accepted dish, or is
/// empty. Updates are whole-list replacements; there is no per-item
/// editing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<String>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list with the dish's ingredients, in order.
    pub fn replace_from(&mut self, dish: &Dish) {
        self.items.clear();
        self.items.extend(dish.ingredients.iter().cloned());
        debug!(dish = %dish.name, items = self.items.len(), "shopping list replaced");
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the list for sharing: one `- ` prefixed line per entry,
    /// joined with newlines. How the text leaves the machine is the
    /// caller's business.
    pub fn as_share_text(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
