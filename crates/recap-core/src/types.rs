//! # Shared Result Types
//!
//! Result shapes shared by more than one topic module.
//!
//! ## Classification Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Classification                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    AgeGroup     │   │   BmiCategory   │   │    Severity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Child          │   │  Underweight    │   │  Info           │       │
//! │  │  Teenager       │   │  NormalWeight   │   │  Success        │       │
//! │  │  Adult          │   │  Overweight     │   │  Warning        │       │
//! │  │  Senior         │   │  Obesity        │   │  Error          │       │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘       │
//! │           │                     │                                       │
//! │           └──────────┬──────────┘                                       │
//! │                      ▼                                                  │
//! │        Classification { category, tag, severity }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The typed enums live in [`control_flow`](crate::control_flow); this file
//! only holds the flattened record a front end renders.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Severity
// =============================================================================

/// Display style attached to a classification.
///
/// A front end maps these onto its alert boxes (info, success, warning, error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Lower-case name, as used in serialized output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Classification
// =============================================================================

/// A category label derived from a numeric threshold ladder.
///
/// Immutable once produced; the caller renders it and throws it away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    /// Human-readable category, e.g. `"Teenager"` or `"Normal weight"`.
    pub category: String,

    /// Auxiliary display tag (an emoji for age groups).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Display style.
    pub severity: Severity,
}

// =============================================================================
// Unit Tests
// =============================================================================
