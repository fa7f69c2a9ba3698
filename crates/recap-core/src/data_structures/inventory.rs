//! # Inventory
//!
//! A caller-owned mapping from product name to quantity.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Who Owns the Inventory?                             │
//! │                                                                         │
//! │  Front end session ──owns──► Inventory                                  │
//! │        │                        ▲                                       │
//! │        │ &mut inventory         │ same reference handed back            │
//! │        ▼                        │                                       │
//! │  inventory_add(inv, "pears", 12) ─┘                                     │
//! │                                                                         │
//! │  The library never stores an inventory between calls. Each session     │
//! │  keeps its own instance; nothing here is shared or locked.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Product names are unique (adding an existing name overwrites it)
//! - Lines keep insertion order; overwriting does not move a line
//! - Quantities are stored as given, without validation

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// One product line in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockLine {
    pub product: String,
    pub quantity: i64,
}

/// Product name → quantity, in insertion order.
///
/// Serialized as a list of `{product, quantity}` lines so the order survives
/// a round trip through JSON or TOML.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Inventory(Vec<StockLine>);

impl Inventory {
    /// Creates a new empty inventory.
    pub fn new() -> Self {
        Inventory(Vec::new())
    }

    /// Sets the quantity of `product`, inserting it at the end when new.
    pub fn set(&mut self, product: &str, quantity: i64) {
        if let Some(line) = self.0.iter_mut().find(|l| l.product == product) {
            line.quantity = quantity;
            return;
        }

        self.0.push(StockLine {
            product: product.to_string(),
            quantity,
        });
    }

    /// Quantity of `product`, if present.
    pub fn get(&self, product: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|l| l.product == product)
            .map(|l| l.quantity)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[StockLine] {
        &self.0
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Inventory {
    /// Later duplicates overwrite earlier ones, as with [`Inventory::set`].
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for (product, quantity) in iter {
            inventory.set(&product.into(), quantity);
        }
        inventory
    }
}

// =============================================================================
// Operations
// =============================================================================

/// Adds or overwrites `product` with `quantity`.
///
/// Mutates `inventory` in place and hands the same reference back, so calls
/// can be nested. The last write wins; quantities are never accumulated.
///
/// ## Example
/// ```rust
/// use recap_core::data_structures::inventory::{format_inventory, inventory_add, Inventory};
///
/// let mut inventory = Inventory::new();
/// inventory_add(inventory_add(&mut inventory, "apples", 5), "apples", 10);
/// assert_eq!(format_inventory(&inventory), vec!["apples: 10 units"]);
/// ```
pub fn inventory_add<'a>(
    inventory: &'a mut Inventory,
    product: &str,
    quantity: i64,
) -> &'a mut Inventory {
    debug!(product, quantity, "Setting inventory quantity");
    inventory.set(product, quantity);
    inventory
}

/// Sum of all quantities, saturating at the `i64` bounds.
pub fn inventory_total(inventory: &Inventory) -> i64 {
    inventory
        .0
        .iter()
        .fold(0i64, |total, line| total.saturating_add(line.quantity))
}

/// One `"{name}: {qty} units"` line per product, in insertion order.
pub fn format_inventory(inventory: &Inventory) -> Vec<String> {
    inventory
        .0
        .iter()
        .map(|l| format!("{}: {} units", l.product, l.quantity))
        .collect()
}

/// The starting stock of the inventory exercise.
pub fn default_inventory() -> Inventory {
    [("apples", 50), ("bananas", 30), ("oranges", 40)]
        .into_iter()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut inventory = Inventory::new();
        inventory_add(inventory_add(&mut inventory, "apples", 5), "apples", 10);
        assert_eq!(format_inventory(&inventory), vec!["apples: 10 units"]);
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_add_returns_same_inventory() {
        let mut inventory = default_inventory();
        let returned = inventory_add(&mut inventory, "pears", 12);
        returned.set("kiwis", 3);
        assert_eq!(inventory.get("pears"), Some(12));
        assert_eq!(inventory.get("kiwis"), Some(3));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut inventory = default_inventory();
        inventory_add(&mut inventory, "apples", 1);
        assert_eq!(
            format_inventory(&inventory),
            vec!["apples: 1 units", "bananas: 30 units", "oranges: 40 units"]
        );
    }

    #[test]
    fn test_total() {
        let mut inventory = default_inventory();
        assert_eq!(inventory_total(&inventory), 120);
        inventory_add(&mut inventory, "pears", 5);
        assert_eq!(inventory_total(&inventory), 125);
        assert_eq!(inventory_total(&Inventory::new()), 0);
    }

    #[test]
    fn test_serializes_as_ordered_lines() {
        let inventory: Inventory = [("b", 2), ("a", 1)].into_iter().collect();
        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "product": "b", "quantity": 2 },
                { "product": "a", "quantity": 1 }
            ])
        );
        let back: Inventory = serde_json::from_value(json).unwrap();
        assert_eq!(back, inventory);
    }

    #[test]
    fn test_total_saturates_on_huge_quantities() {
        let mut inventory = default_inventory();
        inventory_add(&mut inventory, "pears", i64::MAX);

        assert_eq!(inventory_total(&inventory), i64::MAX);
        assert_eq!(format_inventory(&inventory)[3], format!("pears: {} units", i64::MAX));
    }
}
