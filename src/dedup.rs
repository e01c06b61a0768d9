//! Duplicate removal that keeps the first occurrence of every value.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct values of `values` in order of first occurrence.
///
/// O(n) time and O(n) space: one `HashSet` lookup per element.
pub fn dedup_preserve_order<T>(values: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(values.len());
    let mut result = Vec::new();
    for value in values {
        if seen.insert(value) {
            result.push(value.clone());
        }
    }
    result
}

/// Removes duplicate elements from a vector in-place (i.e. modifies v directly).
/// If an element is repeated anywhere in the vector, the element that appears first is kept.
pub fn dedup_in_place<T>(v: &mut Vec<T>)
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(v.len());
    v.retain(|value| seen.insert(value.clone()));
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dedup_preserve_order() {
        assert_eq!(dedup_preserve_order(&[4, 5, 4, 6, 5, 7]), vec![4, 5, 6, 7]);
        assert_eq!(dedup_preserve_order(&[1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(dedup_preserve_order(&[1, 1, 1, 1]), vec![1]);
        assert_eq!(dedup_preserve_order(&[42]), vec![42]);
        assert_eq!(dedup_preserve_order(&[3, 1, 2, 3, 1]), vec![3, 1, 2]);
        assert_eq!(dedup_preserve_order(&[0, -1, 0, -1, 5]), vec![0, -1, 5]);
    }

    #[test]
    fn test_dedup_empty() {
        let empty: Vec<i32> = vec![];
        assert!(dedup_preserve_order(&empty).is_empty());
    }

    #[test]
    fn test_dedup_idempotent() {
        let once = dedup_preserve_order(&[9, 8, 9, 7, 8]);
        assert_eq!(dedup_preserve_order(&once), once);
    }

    #[test]
    fn test_dedup_in_place() {
        let mut v = vec![3, 1, 0, 1, 4, 4];
        dedup_in_place(&mut v);
        assert_eq!(v, vec![3, 1, 0, 4]);
    }

    #[test]
    fn test_dedup_in_place_strings() {
        let mut v = vec![String::from("x"), String::from("y"), String::from("x")];
        dedup_in_place(&mut v);
        assert_eq!(v, vec![String::from("x"), String::from("y")]);
    }
}
