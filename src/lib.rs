pub mod engine;
mod error;
mod item;
pub mod menu;
pub mod persist;
pub mod table;

pub use engine::{InventoryEngine, JsonStore};
pub use error::{Error, Result};
pub use item::{parse_price, parse_quantity, Item, ItemUpdate};
pub use menu::Menu;
