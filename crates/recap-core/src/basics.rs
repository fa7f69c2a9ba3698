//! # Basics
//!
//! Numbers, strings and lists: the first chapter of the tutorial.
//!
//! Every function here is total. Division by zero and empty input produce
//! `None` or empty values instead of errors.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Arithmetic
// =============================================================================

/// The seven arithmetic results for a pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArithmeticResult {
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// `a / b`; `None` when `b == 0`.
    pub quotient: Option<f64>,
    /// `floor(a / b)`; `None` when `b == 0`.
    pub integer_quotient: Option<f64>,
    /// Floored remainder, carrying the sign of `b`; `None` when `b == 0`.
    pub remainder: Option<f64>,
    pub power: f64,
}

/// Applies every arithmetic operator to `a` and `b`.
///
/// ## Division Family
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │   a      b     quotient   integer_quotient   remainder                  │
/// │  ─────  ────   ────────   ────────────────   ─────────                  │
/// │   7      2       3.5            3                1                      │
/// │  -7      2      -3.5           -4                1   (sign of b)        │
/// │   7     -2      -3.5           -4               -1   (sign of b)        │
/// │   7      0       None          None             None                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// `power` is `a.powf(b)`, so `0^-1` is infinity and a negative base with a
/// fractional exponent is NaN.
///
/// ## Example
/// ```rust
/// use recap_core::basics::basic_arithmetic;
///
/// let result = basic_arithmetic(10.0, 3.0);
/// assert_eq!(result.integer_quotient, Some(3.0));
/// assert_eq!(result.remainder, Some(1.0));
/// assert_eq!(basic_arithmetic(10.0, 0.0).quotient, None);
/// ```
pub fn basic_arithmetic(a: f64, b: f64) -> ArithmeticResult {
    let division = (b != 0.0).then(|| {
        let (floor_div, modulo) = floor_div_mod(a, b);
        (a / b, floor_div, modulo)
    });

    ArithmeticResult {
        sum: a + b,
        difference: a - b,
        product: a * b,
        quotient: division.map(|(q, _, _)| q),
        integer_quotient: division.map(|(_, d, _)| d),
        remainder: division.map(|(_, _, m)| m),
        power: a.powf(b),
    }
}

/// Floored division and modulo, consistent with each other:
/// `a == b * div + modulo` up to rounding.
fn floor_div_mod(a: f64, b: f64) -> (f64, f64) {
    let mut modulo = a % b;
    let mut div = (a - modulo) / b;

    if modulo != 0.0 {
        if (b < 0.0) != (modulo < 0.0) {
            modulo += b;
            div -= 1.0;
        }
    } else {
        modulo = 0.0_f64.copysign(b);
    }

    let mut floor_div = div.floor();
    if div - floor_div > 0.5 {
        floor_div += 1.0;
    }

    (floor_div, modulo)
}

// =============================================================================
// Strings
// =============================================================================

/// Properties of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StringAnalysis {
    pub original: String,
    pub uppercase: String,
    pub lowercase: String,
    /// Length in characters, not bytes.
    pub length: usize,
    /// Whitespace-delimited words.
    pub words: Vec<String>,
    pub word_count: usize,
    /// First character, or empty for empty input.
    pub first_letter: String,
    /// Last character, or empty for empty input.
    pub last_letter: String,
}

/// Analyzes a string: case transforms, length, words, first/last character.
///
/// ## Example
/// ```rust
/// use recap_core::basics::analyze_string;
///
/// let analysis = analyze_string("Hello Rust world");
/// assert_eq!(analysis.word_count, 3);
/// assert_eq!(analysis.last_letter, "d");
/// ```
pub fn analyze_string(text: &str) -> StringAnalysis {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    StringAnalysis {
        original: text.to_string(),
        uppercase: text.to_uppercase(),
        lowercase: text.to_lowercase(),
        length: text.chars().count(),
        word_count: words.len(),
        words,
        first_letter: text.chars().next().map(String::from).unwrap_or_default(),
        last_letter: text.chars().next_back().map(String::from).unwrap_or_default(),
    }
}

// =============================================================================
// Lists
// =============================================================================

/// Properties of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAnalysis<T> {
    pub items: Vec<T>,
    pub length: usize,
    pub first: Option<T>,
    pub last: Option<T>,
    /// The first two items, or all of them when there are fewer.
    pub first_two: Vec<T>,
}

/// Analyzes a list: length, first/last element and the first two elements.
pub fn analyze_list<T: Clone>(items: &[T]) -> ListAnalysis<T> {
    ListAnalysis {
        items: items.to_vec(),
        length: items.len(),
        first: items.first().cloned(),
        last: items.last().cloned(),
        first_two: items.iter().take(2).cloned().collect(),
    }
}

// =============================================================================
// Fixed Chapter Examples
// =============================================================================

/// Number examples shown in the chapter text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumberExamples {
    pub sum: i64,
    pub division: f64,
    pub integer_division: i64,
    pub remainder: i64,
    pub power: i64,
}

/// `10 + 5`, `10 / 3`, `10 // 3`, `10 % 3` and `2 ** 3`.
pub fn number_examples() -> NumberExamples {
    NumberExamples {
        sum: 10 + 5,
        division: 10.0 / 3.0,
        integer_division: 10_i64.div_euclid(3),
        remainder: 10_i64.rem_euclid(3),
        power: 2_i64.pow(3),
    }
}

/// String examples shown in the chapter text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StringExamples {
    pub concatenation: String,
    pub f_string: String,
    pub slicing: String,
    pub uppercase: String,
    pub lowercase: String,
    pub length: usize,
}

pub fn string_examples() -> StringExamples {
    let name = "Python";
    let version = "3.11";

    StringExamples {
        concatenation: format!("{} {}", name, version),
        f_string: format!("Learning {} version {}", name, version),
        slicing: name.chars().take(3).collect(),
        uppercase: name.to_uppercase(),
        lowercase: name.to_lowercase(),
        length: name.chars().count(),
    }
}

/// List examples shown in the chapter text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListExamples {
    pub numbers: Vec<i64>,
    pub fruits: Vec<String>,
    pub first_fruit: String,
    pub last_fruit: String,
    /// A copy of `fruits` with one item appended; `fruits` is untouched.
    pub modified_fruits: Vec<String>,
    pub first_two_numbers: Vec<i64>,
}

pub fn list_examples() -> ListExamples {
    let numbers = vec![1, 2, 3, 4, 5];
    let fruits: Vec<String> = ["apple", "banana", "orange"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut modified_fruits = fruits.clone();
    modified_fruits.push("strawberry".to_string());

    ListExamples {
        first_two_numbers: numbers[..2].to_vec(),
        first_fruit: fruits[0].clone(),
        last_fruit: fruits[fruits.len() - 1].clone(),
        numbers,
        fruits,
        modified_fruits,
    }
}

/// The movie list used by the interactive list exercise.
pub fn movie_list() -> Vec<String> {
    ["Inception", "Matrix", "Interstellar", "The Prestige", "Tenet"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
