//! # Data Structures
//!
//! Lists, dictionaries, sets and comprehensions: the third chapter of the
//! tutorial.
//!
//! ```text
//! data_structures/
//! ├── lists.rs          ◄─── append / insert / remove / pop walkthrough
//! ├── records.rs        ◄─── user record → display summary
//! ├── inventory.rs      ◄─── caller-owned product → quantity mapping
//! ├── comprehensions.rs ◄─── cubes, filters, conversions, squares
//! ├── sets.rs           ◄─── set algebra, de-duplication
//! ├── sales.rs          ◄─── revenue totals and average
//! └── words.rs          ◄─── letter frequencies, top-N
//! ```

pub mod comprehensions;
pub mod inventory;
pub mod lists;
pub mod records;
pub mod sales;
pub mod sets;
pub mod words;

pub use comprehensions::{comprehension_demo_set, ComprehensionExamples, ComprehensionInputs};
pub use inventory::{format_inventory, inventory_add, inventory_total, Inventory, StockLine};
pub use sales::{analyze_sales, SaleRecord, SalesAnalysis};
pub use sets::{dedupe, set_ops, SetOperations};
pub use words::{count_letters, top_letters, LetterCount, LetterFrequency};
