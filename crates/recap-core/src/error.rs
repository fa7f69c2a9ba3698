//! # Error Types
//!
//! Domain-specific error types for recap-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  recap-core errors (this file)                                         │
//! │  ├── CoreError        - Errors returned by the utilities               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  recap-cli errors (separate crate)                                     │
//! │  └── CliError         - What the terminal user sees                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degenerate Inputs Are Not Errors
//! Division by zero, empty lists and empty sales are answered with `None`
//! or zero. The only utility that fails is
//! [`calculate_bmi`](crate::control_flow::calculate_bmi), on a non-positive
//! height.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the tutorial utilities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    ///
    /// The message is passed through untouched so a front end can show it
    /// verbatim, e.g. `"Height must be positive"`.
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Integer value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Decimal value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfBounds { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
