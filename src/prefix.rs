//! Running totals (prefix sums).

use crate::error::{LabError, Result};
use crate::number::Number;

/// `output[i] = input[0] + ... + input[i]`.
///
/// One accumulator, one pass: O(n) time and O(n) for the output. Fails with
/// [`LabError::Overflow`] at the first index whose total does not fit in `T`.
pub fn running_total<T: Number>(values: &[T]) -> Result<Vec<T>> {
    let mut totals = Vec::with_capacity(values.len());
    let mut total = T::zero();
    for (index, &value) in values.iter().enumerate() {
        total = total
            .checked_add(value)
            .ok_or(LabError::Overflow { index })?;
        totals.push(total);
    }
    Ok(totals)
}

/// Same as [`running_total`] but wraps around on integer overflow.
pub fn running_total_wrapping<T: Number>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .scan(T::zero(), |total, &value| {
            *total = total.wrapping_add(value);
            Some(*total)
        })
        .collect()
}
