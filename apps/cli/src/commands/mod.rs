//! # Commands Module
//!
//! One function per `recap` subcommand.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (CommandOutput)
//! ├── basics.rs        ◄─── arithmetic, string, list
//! ├── control_flow.rs  ◄─── age, table, bmi, fizzbuzz
//! └── data.rs          ◄─── inventory, comprehensions, sets, dedupe,
//!                           sales, words, examples
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  recap bmi 70 1.75                                                      │
//! │         │                                                               │
//! │         │ (clap)                                                        │
//! │         ▼                                                               │
//! │  commands::control_flow::bmi(70.0, 1.75)                                │
//! │         │                                                               │
//! │         ├──► validate_weight / validate_height                          │
//! │         ├──► recap_core::calculate_bmi                                  │
//! │         └──► recap_core::classify_bmi                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CommandOutput { lines, json }                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render(): lines joined, or json pretty-printed when --json             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // No state
//! fn fizzbuzz(up_to: i64) -> CliResult<CommandOutput>
//!
//! // Session only
//! fn inventory(session: &mut SessionState, adds: &[String]) -> CliResult<CommandOutput>
//!
//! // Config only
//! fn words(config: &ConfigState, text: &str, top: Option<usize>) -> CliResult<CommandOutput>
//! ```

pub mod basics;
pub mod control_flow;
pub mod data;

use serde::Serialize;
use serde_json::Value;

use crate::error::CliResult;

/// What a command produced, in both presentations.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Human-readable lines.
    pub lines: Vec<String>,
    /// Structured result for `--json`.
    pub json: Value,
}

impl CommandOutput {
    /// Pairs display lines with the serialized `payload`.
    pub fn new<T: Serialize>(lines: Vec<String>, payload: &T) -> CliResult<Self> {
        Ok(CommandOutput {
            lines,
            json: serde_json::to_value(payload)?,
        })
    }

    /// Renders the output for stdout.
    pub fn render(&self, json: bool) -> CliResult<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.json)?)
        } else {
            Ok(self.lines.join("\n"))
        }
    }
}

/// Formats a float without a trailing `.0` for whole values.
pub(crate) fn fmt_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Formats an optional float, `None` as `-`.
pub(crate) fn fmt_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), fmt_number)
}

/// Joins displayable items with `", "`.
pub(crate) fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
