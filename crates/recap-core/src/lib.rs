//! # recap-core: Pure Tutorial Utilities
//!
//! This crate is the logic behind every interactive exercise of the
//! programming tutorial. Each function is a leaf: it takes a few scalars or a
//! small collection and returns a small record.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Recap Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (recap-cli, web page, ...)            │   │
//! │  │    reads input ──► owns session inventory ──► renders results   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls (one way)         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ recap-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌──────────────┐  ┌─────────────────────────┐ │   │
//! │  │   │  basics   │  │ control_flow │  │    data_structures      │ │   │
//! │  │   │ numbers   │  │ classify_age │  │ inventory  sets  sales  │ │   │
//! │  │   │ strings   │  │ bmi  tables  │  │ comprehensions  words   │ │   │
//! │  │   │ lists     │  │ fizzbuzz     │  │ lists  records          │ │   │
//! │  │   └───────────┘  └──────────────┘  └─────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NO CALLBACKS INTO THE FRONT END    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`basics`] - Arithmetic, string and list analysis
//! - [`control_flow`] - Classification ladders, tables, BMI, FizzBuzz
//! - [`data_structures`] - Inventory, comprehensions, sets, sales, words
//! - [`money`] - Integer-cent money for the sales exercise
//! - [`types`] - Shared result records
//! - [`validation`] - Input bounds for front ends
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output. The one exception is
//!    [`inventory_add`], which mutates the caller's inventory and returns it
//! 2. **No Crash on Edge Input**: division by zero, empty lists and empty
//!    sales answer with `None` or zero
//! 3. **One Error**: only [`calculate_bmi`] fails, on a non-positive height
//!
//! ## Example Usage
//!
//! ```rust
//! use recap_core::{calculate_bmi, classify_bmi, fizzbuzz};
//!
//! let bmi = calculate_bmi(70.0, 1.75).unwrap();
//! assert_eq!(classify_bmi(bmi).category, "Normal weight");
//!
//! assert_eq!(fizzbuzz(5), vec!["1", "2", "Fizz", "4", "Buzz"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basics;
pub mod control_flow;
pub mod data_structures;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

#[cfg(test)]
mod property_tests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basics::{analyze_list, analyze_string, basic_arithmetic};
pub use control_flow::{
    calculate_bmi, classify_age, classify_bmi, fizzbuzz, multiplication_table, AgeGroup,
    BmiCategory,
};
pub use data_structures::*;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Classification, Severity};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default last multiplier of a multiplication table.
pub const DEFAULT_TABLE_UP_TO: i64 = 10;

/// Default length of the FizzBuzz sequence.
pub const DEFAULT_FIZZBUZZ_UP_TO: i64 = 30;

/// Default number of letters in a top-letters ranking.
pub const DEFAULT_TOP_LETTERS: usize = 5;

/// Longest sequence the generators produce.
///
/// `multiplication_table`, `fizzbuzz`, `countdown` and the comprehension
/// generators stop here; front ends reject larger requests up front.
pub const MAX_SEQUENCE_LEN: i64 = 10_000;

/// Default start of the while-loop countdown.
pub const DEFAULT_COUNTDOWN_START: i64 = 5;

/// Oldest age the age exercise accepts.
pub const MAX_AGE: i64 = 120;

/// Weight bounds of the BMI exercise, in kilograms.
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

/// Height bounds of the BMI exercise, in meters.
pub const MIN_HEIGHT_M: f64 = 1.0;
pub const MAX_HEIGHT_M: f64 = 2.5;

/// Numbers offered by the multiplication table exercise.
pub const MIN_TABLE_NUMBER: i64 = 1;
pub const MAX_TABLE_NUMBER: i64 = 10;
