//! # Comprehensions
//!
//! Map and filter walkthroughs. Each derived collection is independent of
//! the others.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::MAX_SEQUENCE_LEN;

/// `x³` for `x` in `1..=up_to`.
///
/// Like every generator here, stops at [`MAX_SEQUENCE_LEN`].
pub fn generate_cubes(up_to: i64) -> Vec<i64> {
    (1..=up_to.min(MAX_SEQUENCE_LEN))
        .map(|x| x.saturating_pow(3))
        .collect()
}

/// Multiples of 3 in `1..=up_to`.
pub fn filter_divisible_by_3(up_to: i64) -> Vec<i64> {
    (1..=up_to.min(MAX_SEQUENCE_LEN))
        .filter(|x| x % 3 == 0)
        .collect()
}

/// `c × 9/5 + 32` for each value.
pub fn celsius_to_fahrenheit(celsius: &[f64]) -> Vec<f64> {
    celsius.iter().map(|c| c * 9.0 / 5.0 + 32.0).collect()
}

/// First character of each non-empty name.
pub fn extract_initials<S: AsRef<str>>(names: &[S]) -> Vec<char> {
    names
        .iter()
        .filter_map(|name| name.as_ref().chars().next())
        .collect()
}

/// `x → x²` for `x` in `0..below`.
pub fn squares_dict(below: i64) -> BTreeMap<i64, i64> {
    (0..below.min(MAX_SEQUENCE_LEN))
        .map(|x| (x, x * x))
        .collect()
}

/// Inputs for [`comprehension_demo_set`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensionInputs {
    pub cubes_up_to: i64,
    pub divisible_up_to: i64,
    pub celsius: Vec<f64>,
    pub names: Vec<String>,
    pub squares_below: i64,
}

impl Default for ComprehensionInputs {
    /// The values used in the chapter text.
    fn default() -> Self {
        ComprehensionInputs {
            cubes_up_to: 10,
            divisible_up_to: 30,
            celsius: vec![0.0, 10.0, 20.0, 30.0, 40.0],
            names: ["Ana", "Bruno", "Carlos", "Diana"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            squares_below: 5,
        }
    }
}

/// All five comprehension results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComprehensionExamples {
    pub cubes: Vec<i64>,
    pub divisible_by_3: Vec<i64>,
    pub fahrenheit: Vec<f64>,
    pub initials: Vec<char>,
    pub squares_dict: BTreeMap<i64, i64>,
}

pub fn comprehension_demo_set(inputs: &ComprehensionInputs) -> ComprehensionExamples {
    ComprehensionExamples {
        cubes: generate_cubes(inputs.cubes_up_to),
        divisible_by_3: filter_divisible_by_3(inputs.divisible_up_to),
        fahrenheit: celsius_to_fahrenheit(&inputs.celsius),
        initials: extract_initials(&inputs.names),
        squares_dict: squares_dict(inputs.squares_below),
    }
}

/// [`comprehension_demo_set`] over the chapter's inputs.
pub fn comprehension_examples() -> ComprehensionExamples {
    comprehension_demo_set(&ComprehensionInputs::default())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_examples() {
        let examples = comprehension_examples();
        assert_eq!(examples.cubes.len(), 10);
        assert_eq!(examples.cubes[..3], [1, 8, 27]);
        assert_eq!(examples.cubes[9], 1000);
        assert_eq!(examples.divisible_by_3, vec![3, 6, 9, 12, 15, 18, 21, 24, 27, 30]);
        assert_eq!(examples.fahrenheit, vec![32.0, 50.0, 68.0, 86.0, 104.0]);
        assert_eq!(examples.initials, vec!['A', 'B', 'C', 'D']);
        assert_eq!(
            examples.squares_dict.into_iter().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]
        );
    }

    #[test]
    fn test_custom_inputs() {
        let inputs = ComprehensionInputs {
            cubes_up_to: 2,
            divisible_up_to: 5,
            celsius: vec![-40.0, 100.0],
            names: vec!["".to_string(), "zoe".to_string()],
            squares_below: 0,
        };
        let examples = comprehension_demo_set(&inputs);
        assert_eq!(examples.cubes, vec![1, 8]);
        assert_eq!(examples.divisible_by_3, vec![3]);
        assert_eq!(examples.fahrenheit, vec![-40.0, 212.0]);
        assert_eq!(examples.initials, vec!['z']);
        assert!(examples.squares_dict.is_empty());
    }

    #[test]
    fn test_large_limits_are_capped() {
        let cubes = generate_cubes(i64::MAX);
        assert_eq!(cubes.len() as i64, MAX_SEQUENCE_LEN);
        assert_eq!(cubes.last().copied(), Some(MAX_SEQUENCE_LEN.pow(3)));

        assert_eq!(filter_divisible_by_3(i64::MAX).len() as i64, MAX_SEQUENCE_LEN / 3);
        assert_eq!(squares_dict(i64::MAX).len() as i64, MAX_SEQUENCE_LEN);
    }
}
