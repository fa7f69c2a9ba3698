//! # Control Flow
//!
//! Conditionals, loops and functions: the second chapter of the tutorial.
//!
//! ## Exercises
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Control Flow Exercises                             │
//! │                                                                         │
//! │  if/elif/else ──► classify_age(age) ──────────► Classification          │
//! │                                                                         │
//! │  for loop ──────► multiplication_table(n) ────► [(1, n), (2, 2n), ...]  │
//! │                                                                         │
//! │  def ───────────► calculate_bmi(w, h) ────────► f64 or error            │
//! │                   classify_bmi(bmi) ──────────► Classification          │
//! │                                                                         │
//! │  all of it ─────► fizzbuzz(n) ────────────────► ["1", "2", "Fizz", ...] │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Threshold ladders are checked top to bottom with strict `<`, so each
//! boundary value belongs to the upper band (13 is a Teenager, 25.0 is
//! Overweight).

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::types::{Classification, Severity};
use crate::{
    DEFAULT_COUNTDOWN_START, DEFAULT_FIZZBUZZ_UP_TO, DEFAULT_TABLE_UP_TO, MAX_SEQUENCE_LEN,
};

// =============================================================================
// Age Classification
// =============================================================================

/// Life stage derived from an age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Under 13.
    Child,
    /// 13 to 17.
    Teenager,
    /// 18 to 64.
    Adult,
    /// 65 and over.
    Senior,
}

impl AgeGroup {
    /// Picks the group for an age. Negative ages are not rejected; they
    /// fall into `Child`.
    pub const fn from_age(age: i64) -> Self {
        if age < 13 {
            AgeGroup::Child
        } else if age < 18 {
            AgeGroup::Teenager
        } else if age < 65 {
            AgeGroup::Adult
        } else {
            AgeGroup::Senior
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teenager => "Teenager",
            AgeGroup::Adult => "Adult",
            AgeGroup::Senior => "Senior",
        }
    }

    pub const fn tag(&self) -> &'static str {
        match self {
            AgeGroup::Child => "👶",
            AgeGroup::Teenager => "🧑",
            AgeGroup::Adult => "👨",
            AgeGroup::Senior => "👴",
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            AgeGroup::Child => Severity::Success,
            AgeGroup::Teenager => Severity::Info,
            AgeGroup::Adult => Severity::Warning,
            AgeGroup::Senior => Severity::Error,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            category: self.label().to_string(),
            tag: Some(self.tag().to_string()),
            severity: self.severity(),
        }
    }
}

/// Classifies an age into Child / Teenager / Adult / Senior.
///
/// ## Example
/// ```rust
/// use recap_core::control_flow::classify_age;
///
/// assert_eq!(classify_age(12).category, "Child");
/// assert_eq!(classify_age(13).category, "Teenager");
/// assert_eq!(classify_age(65).category, "Senior");
/// ```
pub fn classify_age(age: i64) -> Classification {
    AgeGroup::from_age(age).classification()
}

// =============================================================================
// Multiplication Table
// =============================================================================

/// One row of a multiplication table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TableRow {
    pub multiplier: i64,
    pub product: i64,
}

/// Multiplication table of `n` for multipliers `1..=up_to`.
///
/// `up_to < 1` gives an empty table. Rows stop at [`MAX_SEQUENCE_LEN`] and
/// products saturate at the `i64` bounds.
pub fn multiplication_table(n: i64, up_to: i64) -> Vec<TableRow> {
    (1..=up_to.min(MAX_SEQUENCE_LEN))
        .map(|multiplier| TableRow {
            multiplier,
            product: n.saturating_mul(multiplier),
        })
        .collect()
}

/// Multiplication table of `n` up to the default of 10.
pub fn default_multiplication_table(n: i64) -> Vec<TableRow> {
    multiplication_table(n, DEFAULT_TABLE_UP_TO)
}

/// Table lines formatted as `"7 × 3 = 21"`.
pub fn format_table(n: i64, up_to: i64) -> Vec<String> {
    multiplication_table(n, up_to)
        .into_iter()
        .map(|row| format!("{} × {} = {}", n, row.multiplier, row.product))
        .collect()
}

// =============================================================================
// Body Mass Index
// =============================================================================

/// BMI band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5.
    Underweight,
    /// 18.5 up to 25.
    NormalWeight,
    /// 25 up to 30.
    Overweight,
    /// 30 and above.
    Obesity,
}

impl BmiCategory {
    /// NaN compares false everywhere and lands in `Obesity`.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            BmiCategory::Underweight => Severity::Info,
            BmiCategory::NormalWeight => Severity::Success,
            BmiCategory::Overweight => Severity::Warning,
            BmiCategory::Obesity => Severity::Error,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification {
            category: self.label().to_string(),
            tag: None,
            severity: self.severity(),
        }
    }
}

/// Calculates Body Mass Index: `weight / height²`.
///
/// ## Errors
/// `CoreError::Validation` with the message `"Height must be positive"` when
/// `height_m <= 0`. This is the only validating utility in the crate.
///
/// ## Example
/// ```rust
/// use recap_core::control_flow::calculate_bmi;
///
/// let bmi = calculate_bmi(70.0, 1.75).unwrap();
/// assert!((bmi - 22.857).abs() < 0.001);
///
/// let err = calculate_bmi(70.0, 0.0).unwrap_err();
/// assert_eq!(err.to_string(), "Height must be positive");
/// ```
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> CoreResult<f64> {
    if height_m <= 0.0 {
        debug!(height_m, "Rejected non-positive height");
        return Err(ValidationError::MustBePositive {
            field: "Height".to_string(),
        }
        .into());
    }

    Ok(weight_kg / height_m.powi(2))
}

/// Classifies a BMI value into its band.
pub fn classify_bmi(bmi: f64) -> Classification {
    BmiCategory::from_bmi(bmi).classification()
}

// =============================================================================
// FizzBuzz
// =============================================================================

/// FizzBuzz for `1..=up_to`.
///
/// The divisible-by-15 check runs first, so 15 is `"FizzBuzz"` rather than
/// `"Fizz"`.
///
/// ## Example
/// ```rust
/// use recap_core::control_flow::fizzbuzz;
///
/// let seq = fizzbuzz(15);
/// assert_eq!(seq[2], "Fizz");
/// assert_eq!(seq[4], "Buzz");
/// assert_eq!(seq[14], "FizzBuzz");
/// ```
pub fn fizzbuzz(up_to: i64) -> Vec<String> {
    (1..=up_to.min(MAX_SEQUENCE_LEN))
        .map(|i| {
            if i % 15 == 0 {
                "FizzBuzz".to_string()
            } else if i % 3 == 0 {
                "Fizz".to_string()
            } else if i % 5 == 0 {
                "Buzz".to_string()
            } else {
                i.to_string()
            }
        })
        .collect()
}

/// FizzBuzz up to the default of 30.
pub fn default_fizzbuzz() -> Vec<String> {
    fizzbuzz(DEFAULT_FIZZBUZZ_UP_TO)
}

// =============================================================================
// Fixed Chapter Examples
// =============================================================================

/// Result of the if/elif/else walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionalExample {
    pub age: i64,
    pub category: String,
}

/// The three-way conditional from the chapter text, evaluated for age 25.
pub fn conditional_example() -> ConditionalExample {
    let age = 25;
    let category = if age < 18 {
        "Minor"
    } else if age < 65 {
        "Adult"
    } else {
        "Senior"
    };

    ConditionalExample {
        age,
        category: category.to_string(),
    }
}

/// Sequences iterated by the for-loop walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ForLoopExample {
    pub fruits: Vec<String>,
    pub numbers: Vec<i64>,
}

pub fn for_loop_example() -> ForLoopExample {
    ForLoopExample {
        fruits: ["apple", "banana", "orange"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        numbers: (1..=5).collect(),
    }
}

/// While-loop countdown: `start, start - 1, ..., 1`.
pub fn countdown(start: i64) -> Vec<i64> {
    let mut counter = start.min(MAX_SEQUENCE_LEN);
    let mut numbers = Vec::new();

    while counter > 0 {
        numbers.push(counter);
        counter -= 1;
    }

    numbers
}

/// Countdown from the chapter's default of 5.
pub fn default_countdown() -> Vec<i64> {
    countdown(DEFAULT_COUNTDOWN_START)
}

/// Results of the small functions defined in the chapter text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FunctionExamples {
    pub greeting: String,
    pub area: f64,
    pub power_default: f64,
    pub power_custom: f64,
}

pub fn function_examples() -> FunctionExamples {
    fn greet(name: &str) -> String {
        format!("Hello, {}!", name)
    }

    fn rectangle_area(width: f64, height: f64) -> f64 {
        width * height
    }

    fn power(base: f64, exponent: Option<f64>) -> f64 {
        base.powf(exponent.unwrap_or(2.0))
    }

    FunctionExamples {
        greeting: greet("Maria"),
        area: rectangle_area(5.0, 3.0),
        power_default: power(5.0, None),
        power_custom: power(2.0, Some(3.0)),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_classify_age_boundaries() {
        let cases = [
            (12, "Child"),
            (13, "Teenager"),
            (17, "Teenager"),
            (18, "Adult"),
            (64, "Adult"),
            (65, "Senior"),
        ];
        for (age, expected) in cases {
            assert_eq!(classify_age(age).category, expected, "age {}", age);
        }
    }

    #[test]
    fn test_classify_age_tags_and_severity() {
        let child = classify_age(5);
        assert_eq!(child.tag.as_deref(), Some("👶"));
        assert_eq!(child.severity, Severity::Success);

        let senior = classify_age(80);
        assert_eq!(senior.tag.as_deref(), Some("👴"));
        assert_eq!(senior.severity, Severity::Error);
    }

    #[test]
    fn test_classify_negative_age_is_child() {
        assert_eq!(AgeGroup::from_age(-4), AgeGroup::Child);
    }

    #[test]
    fn test_multiplication_table() {
        let table = multiplication_table(7, 10);
        assert_eq!(table.len(), 10);
        assert_eq!(table[0], TableRow { multiplier: 1, product: 7 });
        assert_eq!(table[9], TableRow { multiplier: 10, product: 70 });
        assert_eq!(default_multiplication_table(7), table);
    }

    #[test]
    fn test_multiplication_table_empty_range() {
        assert!(multiplication_table(7, 0).is_empty());
    }

    #[test]
    fn test_format_table() {
        let lines = format_table(3, 2);
        assert_eq!(lines, vec!["3 × 1 = 3", "3 × 2 = 6"]);
    }

    #[test]
    fn test_calculate_bmi() {
        let bmi = calculate_bmi(70.0, 1.75).unwrap();
        assert!((bmi - 22.857_142_857).abs() < 1e-6);
    }

    #[test]
    fn test_calculate_bmi_rejects_non_positive_height() {
        for height in [0.0, -1.0] {
            let err = calculate_bmi(70.0, height).unwrap_err();
            assert!(matches!(
                err,
                CoreError::Validation(ValidationError::MustBePositive { .. })
            ));
            assert_eq!(err.to_string(), "Height must be positive");
        }
    }

    #[test]
    fn test_classify_bmi_bands() {
        assert_eq!(classify_bmi(18.4).category, "Underweight");
        assert_eq!(classify_bmi(18.5).category, "Normal weight");
        assert_eq!(classify_bmi(24.9).category, "Normal weight");
        assert_eq!(classify_bmi(25.0).category, "Overweight");
        assert_eq!(classify_bmi(30.0).category, "Obesity");
        assert_eq!(classify_bmi(30.0).tag, None);
        assert_eq!(classify_bmi(22.0).severity, Severity::Success);
    }

    #[test]
    fn test_fizzbuzz_thirty() {
        let seq = default_fizzbuzz();
        assert_eq!(seq.len(), 30);
        assert_eq!(&seq[..6], ["1", "2", "Fizz", "4", "Buzz", "Fizz"]);
        assert_eq!(seq[14], "FizzBuzz");
        assert_eq!(seq[29], "FizzBuzz");
        assert_eq!(seq[28], "29");
    }

    #[test]
    fn test_fizzbuzz_empty() {
        assert!(fizzbuzz(0).is_empty());
    }

    #[test]
    fn test_fixed_examples() {
        assert_eq!(conditional_example().category, "Adult");
        assert_eq!(for_loop_example().numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(default_countdown(), vec![5, 4, 3, 2, 1]);
        assert!(countdown(0).is_empty());

        let f = function_examples();
        assert_eq!(f.greeting, "Hello, Maria!");
        assert_eq!(f.area, 15.0);
        assert_eq!(f.power_default, 25.0);
        assert_eq!(f.power_custom, 8.0);
    }

    #[test]
    fn test_large_limits_are_capped() {
        let table = multiplication_table(i64::MAX, 1_000_000_000_000_000_000);
        assert_eq!(table.len() as i64, MAX_SEQUENCE_LEN);
        assert_eq!(table[0].product, i64::MAX);
        assert_eq!(table[1].product, i64::MAX);

        assert_eq!(fizzbuzz(i64::MAX).len() as i64, MAX_SEQUENCE_LEN);
        assert_eq!(countdown(i64::MAX).len() as i64, MAX_SEQUENCE_LEN);
    }
}
