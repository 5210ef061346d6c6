use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::engine::InventoryEngine;
use crate::error::{Error, Result};
use crate::item::{Item, ItemUpdate};
use crate::persist;

/// Inventory backed by two JSON files in a single directory
pub struct JsonStore {
    // Items in stock, keyed by identifier
    active: BTreeMap<String, Item>,

    // Items taken out of stock, in removal order
    removed: Vec<Item>,

    // Directory containing both files
    data_dir: PathBuf,
}

impl JsonStore {
    pub const ACTIVE_FILE: &'static str = "inventory.json";
    pub const REMOVED_FILE: &'static str = "removed_items.json";

    /// Returns `true` if an inventory file already exists
    pub fn is_data_present(path: impl Into<PathBuf>) -> bool {
        path.into().join(Self::ACTIVE_FILE).exists()
    }

    /// Load the inventory stored in `path`. Missing files start out empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = path.into();

        let active: BTreeMap<String, Item> = persist::load(data_dir.join(Self::ACTIVE_FILE))?;
        let removed: Vec<Item> = persist::load(data_dir.join(Self::REMOVED_FILE))?;

        log::info!(
            "Opened inventory in {}: {} active, {} removed",
            data_dir.display(),
            active.len(),
            removed.len()
        );

        Ok(Self {
            active,
            removed,
            data_dir,
        })
    }

    fn save_active(&self) -> Result<()> {
        persist::save(self.data_dir.join(Self::ACTIVE_FILE), &self.active)
    }

    fn save_removed(&self) -> Result<()> {
        persist::save(self.data_dir.join(Self::REMOVED_FILE), &self.removed)
    }
}

impl InventoryEngine for JsonStore {
    fn add(&mut self, item: Item) -> Result<()> {
        if self.active.contains_key(&item.identifier) {
            log::warn!("Refusing to add duplicate item {}", item.identifier);
            return Err(Error::ItemExists(item.identifier));
        }

        log::info!("Adding item {}", item.identifier);
        self.active.insert(item.identifier.clone(), item);

        self.save_active()
    }

    fn remove(&mut self, identifier: &str) -> Result<Item> {
        let item = self
            .active
            .remove(identifier)
            .ok_or_else(|| Error::ItemNotFound(identifier.to_owned()))?;

        log::info!("Removing item {}", identifier);
        self.removed.push(item.clone());

        self.save_active()?;
        self.save_removed()?;

        Ok(item)
    }

    fn update(&mut self, identifier: &str, update: ItemUpdate) -> Result<Item> {
        let item = self
            .active
            .get_mut(identifier)
            .ok_or_else(|| Error::ItemNotFound(identifier.to_owned()))?;

        log::info!("Updating item {}", identifier);
        item.apply(update);
        let item = item.clone();

        self.save_active()?;

        Ok(item)
    }

    fn get(&self, identifier: &str) -> Option<&Item> {
        self.active.get(identifier)
    }

    fn search(&self, query: &str) -> Vec<&Item> {
        let query = query.to_lowercase();

        let found = self
            .active
            .values()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect::<Vec<_>>();

        log::debug!("Search for {:?} matched {} items", query, found.len());

        found
    }

    fn list_active(&self) -> Vec<&Item> {
        self.active.values().collect()
    }

    fn list_removed(&self) -> &[Item] {
        &self.removed
    }
}
