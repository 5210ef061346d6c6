use crate::error::Result;
use crate::item::{Item, ItemUpdate};

mod json;

pub use json::JsonStore;

/// Operations the interactive menu needs from an inventory backend
pub trait InventoryEngine {
    /// Add a new item. Fails with `Error::ItemExists` if the identifier is taken.
    fn add(&mut self, item: Item) -> Result<()>;

    /// Move an item from the active inventory to the removed log.
    fn remove(&mut self, identifier: &str) -> Result<Item>;

    /// Overwrite the supplied fields of an existing item.
    fn update(&mut self, identifier: &str, update: ItemUpdate) -> Result<Item>;

    fn get(&self, identifier: &str) -> Option<&Item>;

    /// Case-insensitive substring match on item names
    fn search(&self, query: &str) -> Vec<&Item>;

    fn list_active(&self) -> Vec<&Item>;

    fn list_removed(&self) -> &[Item];
}
