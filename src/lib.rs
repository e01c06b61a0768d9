//! # Performance Lab
//!
//! Five algorithm exercises, each a single linear pass with its cost analysis next to it.
//!
//! - `frequency` – most frequent element (hash map count, single pass)
//! - `dedup` – duplicate removal preserving first occurrences
//! - `pairs` – pairs of distinct values summing to a target
//! - `growable` – growable sequence with amortized O(1) append via capacity doubling
//! - `prefix` – running totals
//!
//! ```rust
//! use performance_lab::{most_frequent, running_total};
//!
//! assert_eq!(most_frequent(&[1, 3, 2, 3, 4, 1, 3]), Some(3));
//! assert_eq!(running_total(&[1, 2, 3, 4]).unwrap(), vec![1, 3, 6, 10]);
//! ```

pub mod dedup;
pub mod error;
pub mod frequency;
pub mod growable;
pub mod number;
pub mod pairs;
pub mod prefix;

pub use dedup::{dedup_in_place, dedup_preserve_order};
pub use error::LabError;
pub use frequency::{frequency_table, most_frequent};
pub use growable::{
    amortized_report, simulate_appends, AmortizedReport, AppendStep, Doubling, FixedIncrement,
    GrowableSequence, GrowthPolicy, Resize,
};
pub use number::Number;
pub use pairs::{pairs_summing_to, Pair};
pub use prefix::{running_total, running_total_wrapping};
