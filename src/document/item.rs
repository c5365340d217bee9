//! Line items: the billable rows of an estimate

use serde::{Deserialize, Serialize};

/// Unique identifier for a line item, stable across reorders
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create a new item id
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// A single billable row: name, free-text description, quantity and unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    /// Stable identity (survives drag-reorder)
    pub id: ItemId,
    /// Short item name, rendered on its own line
    pub name: String,
    /// Free text, may contain newlines; wraps in the description column
    pub description: String,
    /// Quantity (man-months, units, ...)
    pub quantity: u32,
    /// Unit price in whole currency units
    pub price: i64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            id: ItemId(0),
            name: String::new(),
            description: String::new(),
            quantity: 1,
            price: 0,
        }
    }
}

impl LineItem {
    /// Create an item with the given identity
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Line total = quantity × unit price
    pub fn total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}
