//! Core traits and types shared by every sorting routine.
//!
//! This module defines:
//! - [`Comparator`]: The three-way ordering capability every routine is generic over.
//! - [`SortStats`]: Comparison and swap counts returned by each call.
//! - [`SortError`]: Everything that can go wrong before a sort touches its input.
//! - Tracker: Internal wrapper that counts comparator calls and exchanges.

use cuneiform::cuneiform;
use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// A three-way ordering over two elements of the same type.
///
/// This is the only coupling point between *what* is being sorted and *how* it is
/// sorted. Any `FnMut(&T, &T) -> Ordering` closure is a comparator, so most callers
/// never implement this trait by hand.
///
/// The ordering must be consistent (antisymmetric and transitive) for the whole
/// duration of one sort call. This is not checked. An inconsistent comparator
/// yields an unspecified permutation of the input, never undefined behavior.
///
/// # Examples
///
/// Implementing for a stateful comparator:
///
/// ```
/// use heapsort_kit::core::Comparator;
/// use std::cmp::Ordering;
///
/// struct ByLength;
///
/// impl Comparator<String> for ByLength {
///     fn compare(&mut self, a: &String, b: &String) -> Ordering {
///         a.len().cmp(&b.len())
///     }
/// }
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns `Less`, `Equal` or `Greater` as `a` sorts before, with, or after `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Complexity counters for a single call.
///
/// `comparisons` counts comparator invocations and `swaps` counts element
/// exchanges. Routines that move elements without exchanging them (merge sort
/// copies through a scratch buffer, the library quicksort moves internally)
/// report only what they can observe.
///
/// The `Display` impl renders the quiet-mode report of the line sorting utility:
///
/// ```
/// use heapsort_kit::SortStats;
///
/// let stats = SortStats {
///     comparisons: 12,
///     swaps: 5,
/// };
/// assert_eq!(
///     stats.to_string(),
///     "Compars: 12\nSwaps:   5\n--------\nSum:     17"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl SortStats {
    /// Sum of comparisons and swaps.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

impl std::ops::Add for SortStats {
    type Output = SortStats;

    fn add(self, rhs: SortStats) -> SortStats {
        SortStats {
            comparisons: self.comparisons + rhs.comparisons,
            swaps: self.swaps + rhs.swaps,
        }
    }
}

impl std::ops::AddAssign for SortStats {
    fn add_assign(&mut self, rhs: SortStats) {
        *self = *self + rhs;
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compars: {}", self.comparisons)?;
        writeln!(f, "Swaps:   {}", self.swaps)?;
        writeln!(f, "--------")?;
        write!(f, "Sum:     {}", self.total())
    }
}

/// Errors reported by the sorting front door.
///
/// Every variant is raised before the input slice is modified, so a failed call
/// leaves the caller's data exactly as it was.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Missing algorithm selection flag")]
    MissingFlag,

    #[error("Incorrect algorithm selection flag: {0:?}")]
    UnknownAlgorithm(char),

    #[error("Unknown algorithm: {0:?}")]
    UnknownName(String),

    #[error("Failed to allocate merge scratch buffer for {len} elements")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

// Cache-aligned counts struct.
#[cuneiform]
struct Tally {
    comparisons: u64,
    swaps: u64,
}

/// Instrumented comparator plus exchange primitive.
///
/// Every routine in the crate routes comparisons and swaps through one of these,
/// which is what keeps the counters uniform across algorithms.
pub(crate) struct Tracker<C> {
    cmp: C,
    tally: Tally,
}

impl<C> Tracker<C> {
    pub(crate) fn new(cmp: C) -> Self {
        Tracker {
            cmp,
            tally: Tally {
                comparisons: 0,
                swaps: 0,
            },
        }
    }

    /// Counts and forwards one comparator call.
    #[inline(always)]
    pub(crate) fn compare<T: ?Sized>(&mut self, a: &T, b: &T) -> Ordering
    where
        C: Comparator<T>,
    {
        self.tally.comparisons += 1;
        self.cmp.compare(a, b)
    }

    /// Compares two slots of the same slice.
    #[inline(always)]
    pub(crate) fn compare_at<T>(&mut self, data: &[T], a: usize, b: usize) -> Ordering
    where
        C: Comparator<T>,
    {
        self.compare(&data[a], &data[b])
    }

    /// Exchanges two slots and counts it. `a == b` is a counted no-op.
    #[inline(always)]
    pub(crate) fn swap<T>(&mut self, data: &mut [T], a: usize, b: usize) {
        self.tally.swaps += 1;
        data.swap(a, b);
    }

    pub(crate) fn stats(&self) -> SortStats {
        SortStats {
            comparisons: self.tally.comparisons,
            swaps: self.tally.swaps,
        }
    }
}
