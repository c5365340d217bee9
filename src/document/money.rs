//! Totals arithmetic: subtotal, tax, discount

use serde::{Deserialize, Serialize};

use crate::document::LineItem;

/// A discount is either a flat amount or a percentage of the taxed total,
/// never both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Discount {
    /// Flat amount in whole currency units
    Amount(i64),
    /// Percentage of the total after tax, e.g. `Rate(10.0)` for 10%
    Rate(f64),
}

impl Default for Discount {
    fn default() -> Self {
        Discount::Amount(0)
    }
}

impl Discount {
    /// Resolve the discount against the total after tax.
    /// Rate discounts floor to whole currency units.
    pub fn amount_on(&self, before_discount: i64) -> i64 {
        match self {
            Discount::Amount(n) => *n,
            Discount::Rate(pct) => (before_discount as f64 * (pct / 100.0)).floor() as i64,
        }
    }

    /// The percentage for rate discounts, shown next to the discount row
    pub fn rate(&self) -> Option<f64> {
        match self {
            Discount::Rate(pct) => Some(*pct),
            Discount::Amount(_) => None,
        }
    }
}

/// Derived amounts for the totals section, computed subtotal → tax → discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: i64,
    pub tax: i64,
    pub discount: i64,
    pub total: i64,
}

impl Totals {
    /// Compute totals for an item list. Tax floors to whole currency units.
    pub fn compute(items: &[LineItem], tax_rate: f64, discount: Discount) -> Self {
        let subtotal: i64 = items.iter().map(LineItem::total).sum();
        let tax = (subtotal as f64 * tax_rate).floor() as i64;
        let before_discount = subtotal + tax;
        let discount = discount.amount_on(before_discount);
        Self {
            subtotal,
            tax,
            discount,
            total: before_discount - discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ItemId;

    fn item(quantity: u32, price: i64) -> LineItem {
        LineItem {
            id: ItemId(0),
            name: "x".into(),
            description: String::new(),
            quantity,
            price,
        }
    }

    #[test]
    fn test_rate_discount_applies_after_tax() {
        // subtotal 1,000,000 at 10% tax, 10% rate discount:
        // floor((1,000,000 * 1.1) * 0.9) = 990,000
        let totals = Totals::compute(&[item(1, 1_000_000)], 0.1, Discount::Rate(10.0));
        assert_eq!(totals.subtotal, 1_000_000);
        assert_eq!(totals.tax, 100_000);
        assert_eq!(totals.discount, 110_000);
        assert_eq!(totals.total, 990_000);
    }

    #[test]
    fn test_amount_discount() {
        let totals = Totals::compute(&[item(2, 50_000)], 0.1, Discount::Amount(10_000));
        assert_eq!(totals.subtotal, 100_000);
        assert_eq!(totals.tax, 10_000);
        assert_eq!(totals.discount, 10_000);
        assert_eq!(totals.total, 100_000);
    }

    #[test]
    fn test_tax_floors() {
        let totals = Totals::compute(&[item(1, 15)], 0.1, Discount::default());
        assert_eq!(totals.tax, 1); // floor(1.5)
        assert_eq!(totals.total, 16);
    }

    #[test]
    fn test_empty_items() {
        let totals = Totals::compute(&[], 0.1, Discount::default());
        assert_eq!(totals.subtotal, 0);
        assert_eq!(totals.total, 0);
    }

    #[test]
    fn test_discount_serde_shape() {
        let json = serde_json::to_value(Discount::Rate(10.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "rate", "value": 10.0 }));
        let back: Discount = serde_json::from_value(json).unwrap();
        assert_eq!(back, Discount::Rate(10.0));
    }
}
