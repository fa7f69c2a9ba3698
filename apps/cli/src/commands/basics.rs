//! # Basics Commands
//!
//! `arithmetic`, `string` and `list`.

use recap_core::{analyze_list, analyze_string, basic_arithmetic};

use super::{fmt_number, fmt_optional, join, CommandOutput};
use crate::error::CliResult;

/// All operators applied to `a` and `b`.
pub fn arithmetic(a: f64, b: f64) -> CliResult<CommandOutput> {
    let result = basic_arithmetic(a, b);
    let (a_s, b_s) = (fmt_number(a), fmt_number(b));

    let lines = vec![
        format!("{a_s} + {b_s} = {}", fmt_number(result.sum)),
        format!("{a_s} - {b_s} = {}", fmt_number(result.difference)),
        format!("{a_s} * {b_s} = {}", fmt_number(result.product)),
        format!("{a_s} / {b_s} = {}", fmt_optional(result.quotient)),
        format!("{a_s} // {b_s} = {}", fmt_optional(result.integer_quotient)),
        format!("{a_s} % {b_s} = {}", fmt_optional(result.remainder)),
        format!("{a_s} ** {b_s} = {}", fmt_number(result.power)),
    ];

    CommandOutput::new(lines, &result)
}

pub fn string(text: &str) -> CliResult<CommandOutput> {
    let analysis = analyze_string(text);

    let lines = vec![
        format!("Original: {}", analysis.original),
        format!("Uppercase: {}", analysis.uppercase),
        format!("Lowercase: {}", analysis.lowercase),
        format!("Length: {}", analysis.length),
        format!("Words ({}): {}", analysis.word_count, join(&analysis.words)),
        format!("First letter: {}", analysis.first_letter),
        format!("Last letter: {}", analysis.last_letter),
    ];

    CommandOutput::new(lines, &analysis)
}

pub fn list(items: &[String]) -> CliResult<CommandOutput> {
    let analysis = analyze_list(items);

    let lines = vec![
        format!("Items: {}", join(&analysis.items)),
        format!("Length: {}", analysis.length),
        format!("First: {}", analysis.first.as_deref().unwrap_or("-")),
        format!("Last: {}", analysis.last.as_deref().unwrap_or("-")),
        format!("First two: {}", join(&analysis.first_two)),
    ];

    CommandOutput::new(lines, &analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_lines() {
        let output = arithmetic(10.0, 3.0).unwrap();
        assert_eq!(output.lines[0], "10 + 3 = 13");
        assert_eq!(output.lines[4], "10 // 3 = 3");
        assert_eq!(output.lines[5], "10 % 3 = 1");
        assert_eq!(output.lines[6], "10 ** 3 = 1000");
        assert_eq!(output.json["integer_quotient"], 3.0);
    }

    #[test]
    fn test_arithmetic_division_by_zero() {
        let output = arithmetic(7.0, 0.0).unwrap();
        assert_eq!(output.lines[3], "7 / 0 = -");
        assert!(output.json["quotient"].is_null());
        assert!(output.json["remainder"].is_null());
    }

    #[test]
    fn test_string_empty() {
        let output = string("").unwrap();
        assert_eq!(output.json["length"], 0);
        assert_eq!(output.json["first_letter"], "");
    }

    #[test]
    fn test_list() {
        let items = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let output = list(&items).unwrap();
        assert_eq!(output.lines[3], "Last: z");
        assert_eq!(output.json["first_two"], serde_json::json!(["x", "y"]));

        let empty = list(&[]).unwrap();
        assert_eq!(empty.lines[2], "First: -");
        assert!(empty.json["first"].is_null());
    }
}
