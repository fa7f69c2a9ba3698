//! # List Operations
//!
//! The append / insert / remove / pop walkthrough.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Before and after snapshots of the list walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListOperationsExample {
    pub original: Vec<i64>,
    pub modified: Vec<i64>,
    pub last_popped: Option<i64>,
    pub length: usize,
    pub sum: i64,
    pub max: Option<i64>,
}

/// Runs the walkthrough on a copy of `[1, 2, 3, 4, 5]`:
/// push 6, insert 0 at the front, remove the first 3, pop the last item.
pub fn list_operations_example() -> ListOperationsExample {
    let original = vec![1, 2, 3, 4, 5];

    let mut modified = original.clone();
    modified.push(6);
    modified.insert(0, 0);
    if let Some(pos) = modified.iter().position(|&x| x == 3) {
        modified.remove(pos);
    }
    let last_popped = modified.pop();

    ListOperationsExample {
        length: modified.len(),
        sum: modified.iter().sum(),
        max: modified.iter().copied().max(),
        original,
        modified,
        last_popped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_operations_example() {
        let example = list_operations_example();
        assert_eq!(example.original, vec![1, 2, 3, 4, 5]);
        assert_eq!(example.modified, vec![0, 1, 2, 4, 5]);
        assert_eq!(example.last_popped, Some(6));
        assert_eq!(example.length, 5);
        assert_eq!(example.sum, 12);
        assert_eq!(example.max, Some(5));
    }
}
