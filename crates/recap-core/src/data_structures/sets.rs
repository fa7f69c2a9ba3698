//! # Sets
//!
//! Set algebra and set-based de-duplication.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// The five standard operations on a pair of sets.
///
/// Results are `BTreeSet`s, so they print sorted; callers should still treat
/// them as unordered collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetOperations<T: Ord> {
    /// A ∪ B
    pub union: BTreeSet<T>,
    /// A ∩ B
    pub intersection: BTreeSet<T>,
    /// A − B
    pub difference_ab: BTreeSet<T>,
    /// B − A
    pub difference_ba: BTreeSet<T>,
    /// (A − B) ∪ (B − A)
    pub symmetric_difference: BTreeSet<T>,
}

/// Computes union, intersection, both differences and the symmetric
/// difference of `a` and `b`.
///
/// ## Example
/// ```rust
/// use recap_core::data_structures::sets::{example_sets, set_ops};
///
/// let (a, b) = example_sets();
/// let ops = set_ops(&a, &b);
/// assert_eq!(ops.union.len(), 8);
/// assert_eq!(ops.intersection.into_iter().collect::<Vec<_>>(), vec![4, 5]);
/// ```
pub fn set_ops<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> SetOperations<T> {
    SetOperations {
        union: a.union(b).cloned().collect(),
        intersection: a.intersection(b).cloned().collect(),
        difference_ab: a.difference(b).cloned().collect(),
        difference_ba: b.difference(a).cloned().collect(),
        symmetric_difference: a.symmetric_difference(b).cloned().collect(),
    }
}

/// The distinct elements of `items`.
///
/// The removal goes through a hash set: the output order is unspecified and
/// must not be relied on.
pub fn dedupe<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .cloned()
        .collect::<HashSet<T>>()
        .into_iter()
        .collect()
}

/// The two sets of the set-operations walkthrough.
pub fn example_sets() -> (BTreeSet<i64>, BTreeSet<i64>) {
    ((1..=5).collect(), (4..=8).collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[i64]) -> BTreeSet<i64> {
        items.iter().copied().collect()
    }

    #[test]
    fn test_set_ops_on_example_sets() {
        let (a, b) = example_sets();
        let ops = set_ops(&a, &b);
        assert_eq!(ops.union, set(&[1, 2, 3, 4, 5, 6, 7, 8]));
        assert_eq!(ops.intersection, set(&[4, 5]));
        assert_eq!(ops.difference_ab, set(&[1, 2, 3]));
        assert_eq!(ops.difference_ba, set(&[6, 7, 8]));
        assert_eq!(ops.symmetric_difference, set(&[1, 2, 3, 6, 7, 8]));
    }

    #[test]
    fn test_set_ops_with_empty_set() {
        let a = set(&[1, 2]);
        let ops = set_ops(&a, &BTreeSet::new());
        assert_eq!(ops.union, a);
        assert!(ops.intersection.is_empty());
        assert_eq!(ops.difference_ab, a);
        assert!(ops.difference_ba.is_empty());
    }

    #[test]
    fn test_dedupe_contains_each_value_once() {
        let mut distinct = dedupe(&[1, 2, 2, 3, 3, 3, 4]);
        distinct.sort_unstable();
        assert_eq!(distinct, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_dedupe_strings_and_empty() {
        let mut distinct = dedupe(&["b", "a", "b"]);
        distinct.sort_unstable();
        assert_eq!(distinct, vec!["a", "b"]);
        assert!(dedupe::<i64>(&[]).is_empty());
    }
}
