//! Estimate document model

mod item;
mod money;
mod party;
mod style;

pub use item::{ItemId, LineItem};
pub use money::{Discount, Totals};
pub use party::{ClientInfo, PaymentInfo, SupplierInfo};
pub use style::{
    ClassicSpacing, DefaultSpacing, FooterStyle, GapKey, LayoutKind, Margins, MinimalSpacing,
    ModernSpacing, PaymentStyle, SectionStyle, SpacingConfig, StyleConfig, TableStyle,
    DEFAULT_GAP_PX, DEFAULT_MARGIN_MM,
};

use serde::{Deserialize, Serialize};

/// The authored document: meta, parties, items, footer text blocks,
/// payment, discount and styling.
///
/// The whole value serializes as one snapshot; every field carries a
/// default so older snapshots load with newer fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Estimate {
    pub layout: LayoutKind,
    pub title: String,
    pub number: String,
    /// Issue date, opaque ISO-8601 string (never parsed by the engine)
    pub date: String,
    pub valid_until: String,
    pub supplier: SupplierInfo,
    pub client: ClientInfo,
    pub items: Vec<LineItem>,
    pub notes: String,
    pub notes_title: String,
    pub show_notes: bool,
    pub terms: String,
    pub terms_title: String,
    pub show_terms: bool,
    pub payment: PaymentInfo,
    /// e.g. `0.1` for 10%
    pub tax_rate: f64,
    pub currency: String,
    pub discount: Discount,
    /// Logo image as an opaque data URL; only its presence affects layout
    pub logo: Option<String>,
    /// Company seal image as an opaque data URL
    pub seal: Option<String>,
    pub table_style: TableStyle,
    pub style: StyleConfig,
}

impl Default for Estimate {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Default,
            title: "ESTIMATE".into(),
            number: String::new(),
            date: String::new(),
            valid_until: String::new(),
            supplier: SupplierInfo::default(),
            client: ClientInfo::default(),
            items: Vec::new(),
            notes: String::new(),
            notes_title: "NOTES".into(),
            show_notes: true,
            terms: String::new(),
            terms_title: "TERMS & CONDITIONS".into(),
            show_terms: true,
            payment: PaymentInfo::default(),
            tax_rate: 0.1,
            currency: "KRW".into(),
            discount: Discount::default(),
            logo: None,
            seal: None,
            table_style: TableStyle::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Estimate {
    /// Create a document with default styling and no items
    pub fn new() -> Self {
        Self::default()
    }

    fn next_item_id(&self) -> ItemId {
        ItemId(self.items.iter().map(|i| i.id.0 + 1).max().unwrap_or(0))
    }

    /// Append a new item and return its id. Ids are max-existing + 1, so
    /// they stay unique across remove/reload cycles.
    pub fn push_item(&mut self, name: impl Into<String>) -> ItemId {
        let id = self.next_item_id();
        self.items.push(LineItem::new(id, name));
        id
    }

    /// Remove an item by id
    pub fn remove_item(&mut self, id: ItemId) -> Option<LineItem> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Move the item at `from` to position `to`.
    ///
    /// Explicit remove-and-reinsert rather than in-place splicing, so a
    /// burst of successive drags cannot alias indices. Out-of-range
    /// indices are a no-op.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        true
    }

    /// Duplicate an item, inserting the copy (with a fresh id) right
    /// after the original
    pub fn duplicate_item(&mut self, id: ItemId) -> Option<ItemId> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        let new_id = self.next_item_id();
        let mut copy = self.items[idx].clone();
        copy.id = new_id;
        self.items.insert(idx + 1, copy);
        Some(new_id)
    }

    /// Look up an item by id
    pub fn item(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Derived amounts for the totals section
    pub fn totals(&self) -> Totals {
        Totals::compute(&self.items, self.tax_rate, self.discount)
    }

    /// Whether the notes block participates in layout
    pub fn notes_visible(&self) -> bool {
        self.show_notes && !self.notes.is_empty()
    }

    /// Whether the terms block participates in layout
    pub fn terms_visible(&self) -> bool {
        self.show_terms && !self.terms.is_empty()
    }
}
