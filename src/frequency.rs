//! Most frequent element.
//!
//! One pass over the input: the count table is updated and the running maximum is tracked in
//! the same loop, so there is no second scan over the table. O(n) time, O(k) space for k
//! distinct values.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns a value with the highest occurrence count, or `None` for empty input.
///
/// On a tie the value that reached the maximal count first wins.
pub fn most_frequent<T>(values: &[T]) -> Option<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts: HashMap<&T, usize> = HashMap::new();
    let mut max_count = 0;
    let mut most = None;
    for value in values {
        let count = counts.entry(value).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            most = Some(value);
        }
    }
    log::trace!("most frequent count is {}", max_count);
    most.cloned()
}

/// Occurrence count of every distinct value.
pub fn frequency_table<T>(values: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::with_capacity(values.len());
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent(&[1, 3, 2, 3, 4, 1, 3]), Some(3));
        assert_eq!(most_frequent(&[5]), Some(5));
        assert_eq!(most_frequent(&[2, 2, 2, 2]), Some(2));
        assert_eq!(most_frequent(&[-1, -1, -2, -3, -1]), Some(-1));
    }

    #[test]
    fn test_most_frequent_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(most_frequent(&empty), None);
    }

    #[test]
    fn test_most_frequent_tie() {
        let result = most_frequent(&[1, 1, 2, 2]).unwrap();
        assert!(result == 1 || result == 2);
        // 2 reaches a count of two before 1 does
        assert_eq!(most_frequent(&[1, 2, 2, 1]), Some(2));
    }

    #[test]
    fn test_most_frequent_strings() {
        let words = vec!["a", "b", "b", "c"];
        assert_eq!(most_frequent(&words), Some("b"));
    }

    #[test]
    fn test_frequency_table() {
        let table = frequency_table(&[4, 5, 4, 6, 5, 4]);
        assert_eq!(table.len(), 3);
        assert_eq!(table[&4], 3);
        assert_eq!(table[&5], 2);
        assert_eq!(table[&6], 1);
    }
}
