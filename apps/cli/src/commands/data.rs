//! # Data-Structure Commands
//!
//! `inventory`, `comprehensions`, `sets`, `dedupe`, `sales`, `words` and
//! the fixed chapter `examples`.
//!
//! ## Inventory Arguments
//! ```text
//! recap inventory --add pears=12 --add apples=5
//!                       │
//!                       ▼
//!               parse_stock_arg("pears=12") ──► ("pears", 12)
//!                       │
//!                       ▼
//!               SessionState::add_product (validates, then inventory_add)
//! ```
//! Adds are applied left to right, so a later `--add` for the same product
//! wins.

use recap_core::basics::{
    list_examples, movie_list, number_examples, string_examples, ListExamples, NumberExamples,
    StringExamples,
};
use recap_core::control_flow::{
    conditional_example, default_countdown, for_loop_example, function_examples,
    ConditionalExample, ForLoopExample, FunctionExamples,
};
use recap_core::data_structures::comprehensions::comprehension_examples;
use recap_core::data_structures::lists::{list_operations_example, ListOperationsExample};
use recap_core::data_structures::records::{example_user, user_info, UserInfo, UserRecord};
use recap_core::data_structures::sales::sample_sales;
use recap_core::data_structures::sets::example_sets;
use recap_core::data_structures::words::{analyze_words, parse_word_list, WordAnalysis};
use recap_core::{analyze_sales, dedupe as core_dedupe, set_ops, top_letters, LetterCount};
use serde::Serialize;
use tracing::debug;

use super::{join, CommandOutput};
use crate::error::{CliError, CliResult};
use crate::state::{ConfigState, SessionState};

// =============================================================================
// Inventory
// =============================================================================

/// Splits a `NAME=QTY` argument.
pub fn parse_stock_arg(arg: &str) -> CliResult<(String, i64)> {
    let invalid = |reason: &str| CliError::InvalidArgument {
        value: arg.to_string(),
        reason: reason.to_string(),
    };

    let (name, quantity) = arg
        .split_once('=')
        .ok_or_else(|| invalid("expected NAME=QTY"))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid("quantity must be a whole number"))?;

    Ok((name.to_string(), quantity))
}

#[derive(Debug, Serialize)]
struct InventoryReport<'a> {
    inventory: &'a recap_core::Inventory,
    total: i64,
}

/// Applies each `--add` to the session inventory, then lists the stock.
pub fn inventory(session: &mut SessionState, adds: &[String]) -> CliResult<CommandOutput> {
    for arg in adds {
        let (product, quantity) = parse_stock_arg(arg)?;
        session.add_product(&product, quantity)?;
    }

    let total = session.total();
    let mut lines = session.lines();
    lines.push(format!("Total: {} units", total));

    CommandOutput::new(
        lines,
        &InventoryReport {
            inventory: session.inventory(),
            total,
        },
    )
}

// =============================================================================
// Comprehensions & Sets
// =============================================================================

pub fn comprehensions() -> CliResult<CommandOutput> {
    let examples = comprehension_examples();

    let squares = examples
        .squares_dict
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v));

    let lines = vec![
        format!("Cubes: {}", join(&examples.cubes)),
        format!("Divisible by 3: {}", join(&examples.divisible_by_3)),
        format!("Fahrenheit: {}", join(&examples.fahrenheit)),
        format!("Initials: {}", join(&examples.initials)),
        format!("Squares: {}", join(squares)),
    ];

    CommandOutput::new(lines, &examples)
}

pub fn sets() -> CliResult<CommandOutput> {
    let (a, b) = example_sets();
    let ops = set_ops(&a, &b);

    let lines = vec![
        format!("A: {{{}}}", join(&a)),
        format!("B: {{{}}}", join(&b)),
        format!("A | B: {{{}}}", join(&ops.union)),
        format!("A & B: {{{}}}", join(&ops.intersection)),
        format!("A - B: {{{}}}", join(&ops.difference_ab)),
        format!("B - A: {{{}}}", join(&ops.difference_ba)),
        format!("A ^ B: {{{}}}", join(&ops.symmetric_difference)),
    ];

    CommandOutput::new(lines, &ops)
}

/// Distinct items; their order is not meaningful.
pub fn dedupe(items: &[String]) -> CliResult<CommandOutput> {
    let unique = core_dedupe(items);
    debug!(input = items.len(), unique = unique.len(), "Deduplicated");

    CommandOutput::new(vec![join(&unique)], &unique)
}

// =============================================================================
// Sales & Words
// =============================================================================

pub fn sales() -> CliResult<CommandOutput> {
    let records = sample_sales();
    let analysis = analyze_sales(&records);

    let mut lines: Vec<String> = records
        .iter()
        .zip(&analysis.individual_totals)
        .map(|(sale, total)| {
            format!("{}: {} x {} = {}", sale.product, sale.quantity, sale.price, total)
        })
        .collect();
    lines.push(format!("Total revenue: {}", analysis.total_revenue));
    lines.push(format!("Products sold: {}", analysis.total_products));
    lines.push(format!("Average sale: €{:.2}", analysis.average_sale));

    CommandOutput::new(lines, &analysis)
}

#[derive(Debug, Serialize)]
struct WordsReport {
    words: Vec<String>,
    #[serde(flatten)]
    analysis: WordAnalysis,
    top: Vec<LetterCount>,
}

/// Letter game over free text split on the configured delimiter.
pub fn words(config: &ConfigState, text: &str, top: Option<usize>) -> CliResult<CommandOutput> {
    let top_n = top.unwrap_or(config.top_letters);
    let words = parse_word_list(text, &config.word_delimiter);

    let analysis = analyze_words(&words);
    let top = top_letters(&words, top_n);

    let mut lines = vec![
        format!("Words: {}", join(&words)),
        format!("Total letters: {}", analysis.total_letters),
        format!("Unique letters: {}", analysis.unique_letters),
        format!("Top {}:", top_n),
    ];
    lines.extend(
        top.iter()
            .map(|entry| format!("  '{}': {}", entry.letter, entry.count)),
    );

    CommandOutput::new(
        lines,
        &WordsReport {
            words,
            analysis,
            top,
        },
    )
}

// =============================================================================
// Chapter Examples
// =============================================================================

#[derive(Debug, Serialize)]
struct ExamplesReport {
    numbers: NumberExamples,
    strings: StringExamples,
    lists: ListExamples,
    movies: Vec<String>,
    conditional: ConditionalExample,
    for_loop: ForLoopExample,
    countdown: Vec<i64>,
    functions: FunctionExamples,
    list_operations: ListOperationsExample,
    user: UserRecord,
    user_info: UserInfo,
}

/// Every fixed walkthrough from the tutorial chapters.
pub fn examples() -> CliResult<CommandOutput> {
    let user = example_user();
    let report = ExamplesReport {
        numbers: number_examples(),
        strings: string_examples(),
        lists: list_examples(),
        movies: movie_list(),
        conditional: conditional_example(),
        for_loop: for_loop_example(),
        countdown: default_countdown(),
        functions: function_examples(),
        list_operations: list_operations_example(),
        user_info: user_info(&user),
        user,
    };

    let lines = vec![
        format!(
            "Numbers: sum={} division={:.2} floor={} mod={} power={}",
            report.numbers.sum,
            report.numbers.division,
            report.numbers.integer_division,
            report.numbers.remainder,
            report.numbers.power
        ),
        format!(
            "Strings: {} | {} | {}",
            report.strings.concatenation, report.strings.f_string, report.strings.slicing
        ),
        format!("Fruits: {}", join(&report.lists.modified_fruits)),
        format!("Movies: {}", join(&report.movies)),
        format!(
            "Conditional: age {} is {}",
            report.conditional.age, report.conditional.category
        ),
        format!("Countdown: {}", join(&report.countdown)),
        format!(
            "Functions: {} area={} power={} / {}",
            report.functions.greeting,
            report.functions.area,
            report.functions.power_default,
            report.functions.power_custom
        ),
        format!(
            "List operations: [{}] popped {}",
            join(&report.list_operations.modified),
            report
                .list_operations
                .last_popped
                .map_or_else(|| "-".to_string(), |v| v.to_string())
        ),
        format!(
            "User: {} <{}> {}",
            report.user_info.display, report.user_info.contact, report.user_info.status
        ),
    ];

    CommandOutput::new(lines, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recap_core::data_structures::inventory::default_inventory;

    #[test]
    fn test_parse_stock_arg() {
        assert_eq!(parse_stock_arg("pears=12").unwrap(), ("pears".to_string(), 12));
        assert_eq!(parse_stock_arg("pears= 3").unwrap().1, 3);
        assert!(matches!(
            parse_stock_arg("pears"),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_stock_arg("pears=lots"),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_inventory_applies_adds_in_order() {
        let mut session = SessionState::new(default_inventory());
        let adds = vec!["pears=12".to_string(), "pears=2".to_string()];

        let output = inventory(&mut session, &adds).unwrap();
        assert_eq!(
            output.lines,
            vec![
                "apples: 50 units",
                "bananas: 30 units",
                "oranges: 40 units",
                "pears: 2 units",
                "Total: 122 units",
            ]
        );
        assert_eq!(output.json["total"], 122);
        assert_eq!(output.json["inventory"][3]["product"], "pears");
    }

    #[test]
    fn test_inventory_rejects_zero_quantity() {
        let mut session = SessionState::new(default_inventory());
        let err = inventory(&mut session, &["kiwis=0".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_sets() {
        let output = sets().unwrap();
        assert_eq!(output.lines[3], "A & B: {4, 5}");
        assert_eq!(output.lines[6], "A ^ B: {1, 2, 3, 6, 7, 8}");
        assert_eq!(output.json["difference_ab"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_dedupe() {
        let items: Vec<String> = ["a", "b", "a", "c", "b"].iter().map(|s| s.to_string()).collect();
        let output = dedupe(&items).unwrap();

        let mut unique: Vec<String> = serde_json::from_value(output.json).unwrap();
        unique.sort();
        assert_eq!(unique, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sales() {
        let output = sales().unwrap();
        assert_eq!(output.lines[0], "Laptop: 2 x €1200.00 = €2400.00");
        assert_eq!(output.lines[3], "Total revenue: €2750.00");
        assert_eq!(output.lines[5], "Average sale: €916.67");
    }

    #[test]
    fn test_words_uses_configured_delimiter() {
        let config = ConfigState {
            word_delimiter: ";".to_string(),
            ..ConfigState::default()
        };
        let output = words(&config, "aab;b", Some(1)).unwrap();

        assert_eq!(output.json["words"], serde_json::json!(["aab", "b"]));
        assert_eq!(output.json["total_letters"], 4);
        assert_eq!(output.lines.last().unwrap(), "  'a': 2");
        assert_eq!(output.json["top"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_words_counts_spaces_after_delimiter() {
        let config = ConfigState::default();
        let output = words(&config, "a, a", None).unwrap();
        assert_eq!(output.json["unique_letters"], 2);
    }

    #[test]
    fn test_examples() {
        let output = examples().unwrap();
        assert_eq!(output.json["countdown"], serde_json::json!([5, 4, 3, 2, 1]));
        assert_eq!(output.json["user_info"]["display"], "Maria Silva (28 years)");
        assert_eq!(output.json["list_operations"]["last_popped"], 6);
    }

    #[test]
    fn test_comprehensions() {
        let output = comprehensions().unwrap();
        assert_eq!(output.lines[3], "Initials: A, B, C, D");
        assert_eq!(output.lines[4], "Squares: 0: 0, 1: 1, 2: 4, 3: 9, 4: 16");
    }
}
