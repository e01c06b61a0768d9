//! Pairs of distinct values that sum to a target.
//!
//! Single pass: for each value, its complement `target - value` is looked up among the values
//! seen so far. O(n) time, O(n) space.

use crate::error::{LabError, Result};
use crate::number::Number;
use std::collections::HashSet;
use std::hash::Hash;

/// An unordered pair reported as `(smaller, larger)`.
pub type Pair<T> = (T, T);

fn canonical<T: Ord>(a: T, b: T) -> Pair<T> {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns every pair `{a, b}` of `values` with `a + b == target` and `a != b`.
///
/// Pairs come out in the order their second member appears in the input. The input must not
/// contain repeated values; a repeat is rejected with [`LabError::DuplicateValue`] instead of
/// producing pairs whose multiplicity would be ambiguous.
pub fn pairs_summing_to<T>(values: &[T], target: T) -> Result<Vec<Pair<T>>>
where
    T: Number + Eq + Hash + Ord,
{
    let mut seen = HashSet::with_capacity(values.len());
    let mut pairs = Vec::new();
    for &value in values {
        // An out-of-range complement cannot be in the input.
        if let Some(complement) = target.checked_sub(value) {
            if complement != value && seen.contains(&complement) {
                pairs.push(canonical(value, complement));
            }
        }
        if !seen.insert(value) {
            return Err(LabError::DuplicateValue {
                value: format!("{:?}", value),
            });
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod test {
    use super::*;

    fn sorted(mut pairs: Vec<Pair<i32>>) -> Vec<Pair<i32>> {
        pairs.sort();
        pairs
    }

    #[test]
    fn test_pairs_summing_to() {
        assert_eq!(
            sorted(pairs_summing_to(&[1, 2, 3, 4], 5).unwrap()),
            vec![(1, 4), (2, 3)]
        );
        assert_eq!(
            sorted(pairs_summing_to(&[1, 2, 3, 4, 5, 6], 7).unwrap()),
            vec![(1, 6), (2, 5), (3, 4)]
        );
        assert_eq!(
            sorted(pairs_summing_to(&[-1, -2, 3, 4], 2).unwrap()),
            vec![(-2, 4), (-1, 3)]
        );
    }

    #[test]
    fn test_pairs_canonical_order() {
        assert_eq!(pairs_summing_to(&[0, 5, -5, 3], 0).unwrap(), vec![(-5, 5)]);
        assert_eq!(pairs_summing_to(&[4, 1], 5).unwrap(), vec![(1, 4)]);
    }

    #[test]
    fn test_pairs_none() {
        assert!(pairs_summing_to(&[1, 2, 3], 10).unwrap().is_empty());
        assert!(pairs_summing_to(&[5], 10).unwrap().is_empty());
        let empty: [i32; 0] = [];
        assert!(pairs_summing_to(&empty, 5).unwrap().is_empty());
    }

    #[test]
    fn test_pairs_rejects_duplicates() {
        assert_eq!(
            pairs_summing_to(&[2, 2], 4),
            Err(LabError::DuplicateValue {
                value: String::from("2")
            })
        );
    }

    #[test]
    fn test_pairs_unsigned_complement_out_of_range() {
        assert_eq!(pairs_summing_to(&[1u8, 9, 200], 10).unwrap(), vec![(1, 9)]);
        assert!(pairs_summing_to(&[u8::MAX, 1], 0).unwrap().is_empty());
    }
}
