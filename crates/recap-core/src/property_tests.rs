//! Property-based tests using proptest.
//!
//! Invariants that should hold for all inputs, not just the chapter examples.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use crate::control_flow::{classify_age, fizzbuzz, multiplication_table, AgeGroup};
use crate::data_structures::inventory::{format_inventory, inventory_add, inventory_total, Inventory};
use crate::data_structures::sales::{analyze_sales, SaleRecord};
use crate::data_structures::sets::{dedupe, set_ops};
use crate::data_structures::words::{count_letters, top_letters};
use crate::money::Money;

proptest! {
    // ========================================================================
    // Control Flow
    // ========================================================================

    /// Every FizzBuzz entry follows the divisibility rule for its position
    #[test]
    fn fizzbuzz_follows_divisibility_rule(up_to in 0i64..200) {
        let seq = fizzbuzz(up_to);
        prop_assert_eq!(seq.len() as i64, up_to);

        for (idx, entry) in seq.iter().enumerate() {
            let i = idx as i64 + 1;
            let expected = match (i % 3 == 0, i % 5 == 0) {
                (true, true) => "FizzBuzz".to_string(),
                (true, false) => "Fizz".to_string(),
                (false, true) => "Buzz".to_string(),
                (false, false) => i.to_string(),
            };
            prop_assert_eq!(entry, &expected);
        }
    }

    /// Age groups never decrease as age increases
    #[test]
    fn age_groups_are_monotonic(age in -10i64..150) {
        let rank = |group: AgeGroup| group as u8;
        prop_assert!(rank(AgeGroup::from_age(age)) <= rank(AgeGroup::from_age(age + 1)));
        prop_assert_eq!(classify_age(age).category, AgeGroup::from_age(age).label());
    }

    /// Table rows are the multiples of n in order
    #[test]
    fn table_rows_are_multiples(n in -100i64..100, up_to in 0i64..50) {
        let table = multiplication_table(n, up_to);
        prop_assert_eq!(table.len() as i64, up_to);
        for (idx, row) in table.iter().enumerate() {
            prop_assert_eq!(row.multiplier, idx as i64 + 1);
            prop_assert_eq!(row.product, n * row.multiplier);
        }
    }

    // ========================================================================
    // Sets
    // ========================================================================

    /// dedupe keeps exactly the distinct input values
    #[test]
    fn dedupe_keeps_distinct_values(items in prop::collection::vec(0i64..20, 0..40)) {
        let distinct = dedupe(&items);
        let as_set: HashSet<i64> = distinct.iter().copied().collect();

        prop_assert_eq!(as_set.len(), distinct.len());
        prop_assert_eq!(as_set, items.iter().copied().collect::<HashSet<i64>>());
    }

    /// |A ∪ B| = |A − B| + |B − A| + |A ∩ B|
    #[test]
    fn set_ops_partition_the_union(
        a in prop::collection::btree_set(0i64..30, 0..15),
        b in prop::collection::btree_set(0i64..30, 0..15),
    ) {
        let ops = set_ops(&a, &b);
        prop_assert_eq!(
            ops.union.len(),
            ops.difference_ab.len() + ops.difference_ba.len() + ops.intersection.len()
        );
        let symmetric: BTreeSet<i64> = ops.difference_ab.union(&ops.difference_ba).copied().collect();
        prop_assert_eq!(ops.symmetric_difference, symmetric);
    }

    // ========================================================================
    // Inventory and Sales
    // ========================================================================

    /// Repeated writes to one product keep only the last quantity
    #[test]
    fn inventory_last_write_wins(quantities in prop::collection::vec(0i64..1000, 1..10)) {
        let mut inventory = Inventory::new();
        for &qty in &quantities {
            inventory_add(&mut inventory, "apples", qty);
        }

        let last = quantities[quantities.len() - 1];
        prop_assert_eq!(inventory_total(&inventory), last);
        prop_assert_eq!(format_inventory(&inventory), vec![format!("apples: {} units", last)]);
    }

    /// Revenue is the sum of the line totals
    #[test]
    fn sales_revenue_is_sum_of_lines(
        lines in prop::collection::vec((0i64..100_000, 0i64..100), 0..10)
    ) {
        let sales: Vec<SaleRecord> = lines
            .iter()
            .map(|&(cents, qty)| SaleRecord::new("item", Money::from_cents(cents), qty))
            .collect();
        let analysis = analyze_sales(&sales);

        let expected: i64 = lines.iter().map(|&(cents, qty)| cents * qty).sum();
        prop_assert_eq!(analysis.total_revenue.cents(), expected);
        prop_assert_eq!(analysis.individual_totals.len(), sales.len());
        if sales.is_empty() {
            prop_assert_eq!(analysis.average_sale, 0.0);
        } else {
            let back = analysis.average_sale * sales.len() as f64;
            prop_assert!((back - analysis.total_revenue.as_f64()).abs() < 1e-6);
        }
    }

    // ========================================================================
    // Words
    // ========================================================================

    /// Top letters are sorted by count and agree with the full frequency table
    #[test]
    fn top_letters_are_ranked(words in prop::collection::vec("[a-eA-E ]{0,8}", 0..6), top_n in 0usize..8) {
        let frequency = count_letters(&words);
        let top = top_letters(&words, top_n);

        prop_assert_eq!(top.len(), top_n.min(frequency.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for entry in &top {
            prop_assert_eq!(frequency.get(entry.letter), entry.count);
        }

        // Equal counts keep the order in which the letters were first seen
        let first_seen = |letter: char| {
            frequency.entries().iter().position(|c| c.letter == letter)
        };
        for pair in top.windows(2) {
            if pair[0].count == pair[1].count {
                prop_assert!(first_seen(pair[0].letter) < first_seen(pair[1].letter));
            }
        }

        let total: usize = frequency.entries().iter().map(|c| c.count).sum();
        let joined_len: usize = words.iter().map(|w| w.to_lowercase().chars().count()).sum();
        prop_assert_eq!(total, joined_len);
    }
}
