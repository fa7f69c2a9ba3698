//! # Validation Module
//!
//! Bounds checks for values a learner types into an exercise.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end (widget bounds, argument parsing)                  │
//! │  ├── Type checks (is it a number?)                                     │
//! │  └── THIS MODULE: the exercise's input bounds                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Utility functions                                            │
//! │  ├── calculate_bmi rejects a non-positive height                       │
//! │  └── Everything else answers degenerate input with None / zero         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The utilities never call these validators themselves: `classify_age(-3)`
//! still answers "Child". A front end calls them before handing input over.
//!
//! ## Usage
//! ```rust
//! use recap_core::validation::{validate_age, validate_height};
//!
//! assert!(validate_age(25).is_ok());
//! assert!(validate_age(130).is_err());
//! assert!(validate_height(1.75).is_ok());
//! ```

use crate::error::ValidationError;
use crate::{
    MAX_AGE, MAX_HEIGHT_M, MAX_SEQUENCE_LEN, MAX_TABLE_NUMBER, MAX_WEIGHT_KG, MIN_HEIGHT_M,
    MIN_TABLE_NUMBER, MIN_WEIGHT_KG,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name for the inventory exercise.
///
/// Blank names are rejected. The name itself is left as typed.
///
/// ## Example
/// ```rust
/// use recap_core::validation::validate_product_name;
///
/// assert!(validate_product_name("  pears ").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an age (0 to 120 inclusive).
pub fn validate_age(age: i64) -> ValidationResult<()> {
    if !(0..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: MAX_AGE,
        });
    }

    Ok(())
}

/// Validates an inventory quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates the number whose multiplication table is shown (1 to 10).
pub fn validate_table_number(n: i64) -> ValidationResult<()> {
    if !(MIN_TABLE_NUMBER..=MAX_TABLE_NUMBER).contains(&n) {
        return Err(ValidationError::OutOfRange {
            field: "number".to_string(),
            min: MIN_TABLE_NUMBER,
            max: MAX_TABLE_NUMBER,
        });
    }

    Ok(())
}

/// Validates a body weight in kilograms.
pub fn validate_weight(weight_kg: f64) -> ValidationResult<()> {
    validate_decimal("weight", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)
}

/// Validates a body height in meters.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  BMI Exercise                                                           │
/// │                                                                         │
/// │  User enters height: 1.75                                              │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_height(1.75) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── outside 1.0..=2.5? → "height must be between 1 and 2.5"      │
/// │       │                                                                 │
/// │       └── OK → calculate_bmi(weight, height)                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_height(height_m: f64) -> ValidationResult<()> {
    validate_decimal("height", height_m, MIN_HEIGHT_M, MAX_HEIGHT_M)
}

/// NaN fails every range check.
fn validate_decimal(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfBounds {
            field: field.to_string(),
            min,
            max,
        });
    }

    Ok(())
}

/// Validates a sequence length such as the table's or FizzBuzz's `up_to`.
///
/// ## Rules
/// - 0 to [`MAX_SEQUENCE_LEN`] inclusive (0 gives an empty sequence)
pub fn validate_up_to(field: &str, up_to: i64) -> ValidationResult<()> {
    if !(0..=MAX_SEQUENCE_LEN).contains(&up_to) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_SEQUENCE_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
