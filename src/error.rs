use thiserror::Error;

/// Errors reported by the lab operations.
///
/// Empty input is never an error: every operation has a well-defined empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabError {
    /// `pairs_summing_to` expects distinct values.
    #[error("input contains duplicate value {value}")]
    DuplicateValue { value: String },

    #[error("running total overflowed at index {index}")]
    Overflow { index: usize },
}

pub type Result<T> = std::result::Result<T, LabError>;
