//! # Session State
//!
//! Everything a learner's session carries between exercise calls.
//!
//! ## Ownership
//! The session owns its inventory and lends it to `recap-core` one call at
//! a time. There is no process-wide session object: whoever creates a
//! `SessionState` passes it explicitly to the commands that need it, so two
//! sessions can never see each other's stock.
//!
//! ## Inventory Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Inventory Operations                         │
//! │                                                                         │
//! │  CLI Input               Session Method          Core Call              │
//! │  ─────────               ──────────────          ─────────              │
//! │                                                                         │
//! │  --add pears=12 ───────► add_product() ────────► inventory_add()        │
//! │                          (validates first)                              │
//! │                                                                         │
//! │  (always) ─────────────► lines() ──────────────► format_inventory()     │
//! │                          total() ──────────────► inventory_total()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use recap_core::data_structures::inventory::{
    format_inventory, inventory_add, inventory_total, Inventory,
};
use recap_core::validation::{validate_product_name, validate_quantity};
use serde::Serialize;
use tracing::info;

use crate::error::CliResult;

/// One learner's session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    inventory: Inventory,

    /// When the session was created.
    pub started_at: DateTime<Utc>,
}

impl SessionState {
    /// Starts a session with its own copy of the seed inventory.
    pub fn new(seed: Inventory) -> Self {
        SessionState {
            inventory: seed,
            started_at: Utc::now(),
        }
    }

    /// Validates the product line, then sets it in the session inventory.
    ///
    /// ## Rules
    /// - Product name must not be blank; it is stored as typed
    /// - Quantity must be positive
    pub fn add_product(&mut self, product: &str, quantity: i64) -> CliResult<&Inventory> {
        validate_product_name(product)?;
        validate_quantity(quantity)?;

        let inventory = inventory_add(&mut self.inventory, product, quantity);
        info!(%product, quantity, products = inventory.len(), "Inventory updated");
        Ok(inventory)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Display lines of the current stock.
    pub fn lines(&self) -> Vec<String> {
        format_inventory(&self.inventory)
    }

    /// Total units in stock.
    pub fn total(&self) -> i64 {
        inventory_total(&self.inventory)
    }
}
