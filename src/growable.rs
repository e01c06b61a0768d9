//! Growable indexed sequence with amortized O(1) append.
//!
//! Variables:
//!   C : capacity, starts at 1
//!   S : size, starts at 0, S <= C always
//!
//! Transitions (only `append` mutates):
//!   S <  C  =>  storage[S] = x, S += 1                                   O(1)
//!   S == C  =>  resize C -> grow(C), relocate 0..S, then place as above   O(S)
//!
//! With `Doubling`, resizes happen at sizes 1, 2, 4, 8, ..., i.e. ceil(log2 n) times for
//! n appends, and relocate 1 + 2 + 4 + ... < 2n elements in total. Adding the n placements
//! gives less than 3n units of work: O(1) amortized per append. Growing by a constant
//! instead resizes every k appends and relocates O(n^2) elements.

use std::fmt::{self, Display, Formatter};
use std::slice;

/// Decides the next capacity when the sequence is full.
pub trait GrowthPolicy {
    fn grow(&self, current: usize) -> usize;
}

/// Geometric growth: capacity doubles on every resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    fn grow(&self, current: usize) -> usize {
        current.saturating_mul(2)
    }
}

/// Arithmetic growth: capacity increases by a constant. An increment of 0 behaves as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedIncrement(pub usize);

impl GrowthPolicy for FixedIncrement {
    fn grow(&self, current: usize) -> usize {
        current.saturating_add(self.0.max(1))
    }
}

/// A resize event: storage was reallocated from `from` to `to` slots and `relocated`
/// elements were moved over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub from: usize,
    pub to: usize,
    pub relocated: usize,
}

impl Display for Resize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Resizing from {} to {}", self.from, self.to)
    }
}

pub struct GrowableSequence<T, P = Doubling> {
    /// Backing buffer, allocated for exactly `capacity` slots. Its length is the size.
    storage: Vec<T>,
    capacity: usize,
    policy: P,
    resizes: usize,
    relocations: usize,
}

impl<T> GrowableSequence<T> {
    pub fn new() -> Self {
        Self::with_policy(Doubling)
    }
}

impl<T, P: GrowthPolicy> GrowableSequence<T, P> {
    /// Creates an empty sequence with capacity 1 that grows according to `policy`.
    pub fn with_policy(policy: P) -> Self {
        GrowableSequence {
            storage: Vec::with_capacity(1),
            capacity: 1,
            policy,
            resizes: 0,
            relocations: 0,
        }
    }

    /// Appends `value` at index `len()`.
    ///
    /// If the sequence is full, the storage is resized first and the resize is returned.
    /// Appending never fails.
    pub fn append(&mut self, value: T) -> Option<Resize> {
        let resize = if self.storage.len() == self.capacity {
            Some(self.resize())
        } else {
            None
        };
        self.storage.push(value);
        log::trace!(
            "placed index {}, size now {}/{}",
            self.storage.len() - 1,
            self.storage.len(),
            self.capacity
        );
        resize
    }

    fn resize(&mut self) -> Resize {
        let from = self.capacity;
        let to = self.policy.grow(from).max(from + 1);
        log::debug!("resizing from {} to {}", from, to);

        let mut storage = Vec::with_capacity(to);
        storage.extend(self.storage.drain(..));
        let relocated = storage.len();
        self.storage = storage;
        self.capacity = to;

        self.resizes += 1;
        self.relocations += relocated;
        Resize {
            from,
            to,
            relocated,
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Number of resize events so far.
    pub fn resize_count(&self) -> usize {
        self.resizes
    }

    /// Total elements moved across all resizes.
    pub fn relocations(&self) -> usize {
        self.relocations
    }
}

impl<T, P: GrowthPolicy + Default> Default for GrowableSequence<T, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<T, P: GrowthPolicy> Extend<T> for GrowableSequence<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T, P: GrowthPolicy + Default> std::iter::FromIterator<T> for GrowableSequence<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sequence = Self::default();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, T, P> IntoIterator for &'a GrowableSequence<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

/// One append of [`simulate_appends`]: the item, the resize it triggered (if any), and the
/// state right after placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendStep {
    pub item: usize,
    pub resize: Option<Resize>,
    pub size: usize,
    pub capacity: usize,
}

impl Display for AppendStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(resize) = self.resize {
            writeln!(f, "{}", resize)?;
        }
        write!(
            f,
            "Added item {}, size now {}/{}",
            self.item, self.size, self.capacity
        )
    }
}

/// Appends `0..n` to a fresh doubling sequence and records every step.
pub fn simulate_appends(n: usize) -> Vec<AppendStep> {
    let mut sequence = GrowableSequence::new();
    let mut steps = Vec::with_capacity(n);
    for item in 0..n {
        let resize = sequence.append(item);
        let step = AppendStep {
            item,
            resize,
            size: sequence.len(),
            capacity: sequence.capacity(),
        };
        if let Some(resize) = resize {
            log::debug!("{}", resize);
        }
        log::debug!(
            "Added item {}, size now {}/{}",
            step.item,
            step.size,
            step.capacity
        );
        steps.push(step);
    }
    steps
}

/// Cost totals for `appends` appends under one growth policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmortizedReport {
    pub appends: usize,
    pub resizes: usize,
    pub relocations: usize,
    /// Placements plus relocations.
    pub total_work: usize,
}

impl AmortizedReport {
    pub fn work_per_append(&self) -> f64 {
        if self.appends == 0 {
            0.0
        } else {
            self.total_work as f64 / self.appends as f64
        }
    }
}

impl Display for AmortizedReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} appends, {} resizes, {} relocations, {:.2} work per append",
            self.appends,
            self.resizes,
            self.relocations,
            self.work_per_append()
        )
    }
}

pub fn amortized_report<P: GrowthPolicy>(appends: usize, policy: P) -> AmortizedReport {
    let mut sequence = GrowableSequence::with_policy(policy);
    sequence.extend(0..appends);
    AmortizedReport {
        appends,
        resizes: sequence.resize_count(),
        relocations: sequence.relocations(),
        total_work: appends + sequence.relocations(),
    }
}
