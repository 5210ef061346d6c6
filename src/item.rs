use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single inventory entry
///
/// `identifier` doubles as the key in the active inventory map and never
/// changes once the item is created.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Item {
    pub identifier: String,
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

impl Item {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>, quantity: u64, price: f64) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    // Overwrite every field that has a new value
    pub(crate) fn apply(&mut self, update: ItemUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}

/// Partial update of an item; `None` keeps the current value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub quantity: Option<u64>,
    pub price: Option<f64>,
}

/// Parse a quantity typed by the operator
pub fn parse_quantity(input: &str) -> Result<u64> {
    input.trim().parse::<u64>().map_err(|_| Error::InvalidNumber {
        field: "quantity",
        input: input.trim().to_owned(),
    })
}

/// Parse a price typed by the operator. Both `.` and `,` are accepted as the
/// decimal separator.
pub fn parse_price(input: &str) -> Result<f64> {
    let invalid = || Error::InvalidNumber {
        field: "price",
        input: input.trim().to_owned(),
    };

    let price = input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| invalid())?;

    if !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }

    Ok(price)
}
