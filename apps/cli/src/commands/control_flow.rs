//! # Control-Flow Commands
//!
//! `age`, `table`, `bmi` and `fizzbuzz`.
//!
//! User input is checked against the exercise bounds before it reaches the
//! core classifiers:
//!
//! | Command  | Bound                            |
//! |----------|----------------------------------|
//! | age      | 0..=120                          |
//! | table    | n in 1..=10, up_to in 0..=10000  |
//! | fizzbuzz | up_to in 0..=10000               |
//! | bmi      | 30..=200 kg, 1..=2.5 m           |

use recap_core::control_flow::{format_table, multiplication_table};
use recap_core::validation::{
    validate_age, validate_height, validate_table_number, validate_up_to, validate_weight,
};
use recap_core::{
    calculate_bmi, classify_age, classify_bmi, fizzbuzz as core_fizzbuzz, Classification,
};
use serde::Serialize;

use super::CommandOutput;
use crate::error::CliResult;

#[derive(Debug, Serialize)]
struct AgeReport {
    age: i64,
    #[serde(flatten)]
    classification: Classification,
}

#[derive(Debug, Serialize)]
struct BmiReport {
    bmi: f64,
    #[serde(flatten)]
    classification: Classification,
}

fn describe(classification: &Classification) -> String {
    match &classification.tag {
        Some(tag) => format!("{} {}", tag, classification.category),
        None => classification.category.clone(),
    }
}

pub fn age(age: i64) -> CliResult<CommandOutput> {
    validate_age(age)?;
    let classification = classify_age(age);

    let lines = vec![format!("Age {}: {}", age, describe(&classification))];
    CommandOutput::new(lines, &AgeReport { age, classification })
}

/// Rows `n × 1` through `n × up_to`.
pub fn table(n: i64, up_to: i64) -> CliResult<CommandOutput> {
    validate_table_number(n)?;
    validate_up_to("up_to", up_to)?;

    let rows = multiplication_table(n, up_to);
    CommandOutput::new(format_table(n, up_to), &rows)
}

pub fn bmi(weight_kg: f64, height_m: f64) -> CliResult<CommandOutput> {
    validate_weight(weight_kg)?;
    validate_height(height_m)?;

    let bmi = calculate_bmi(weight_kg, height_m)?;
    let classification = classify_bmi(bmi);

    let lines = vec![
        format!("BMI: {:.1}", bmi),
        format!("Category: {}", describe(&classification)),
    ];
    CommandOutput::new(lines, &BmiReport { bmi, classification })
}

pub fn fizzbuzz(up_to: i64) -> CliResult<CommandOutput> {
    validate_up_to("up_to", up_to)?;
    let sequence = core_fizzbuzz(up_to);
    CommandOutput::new(sequence.clone(), &sequence)
}
