//! Comparator-driven sorting algorithms and the dispatcher that selects between them.
//!
//! Every algorithm sorts a slice in place in ascending order and returns the
//! [`SortStats`] it accumulated:
//! - **Bubble sort**: adjacent exchanges, skipping the untouched front and the
//!   settled tail on every pass.
//! - **Insertion sort**: stable, sinks each element into the sorted prefix.
//! - **Selection sort**: one exchange per position at most.
//! - **Merge sort**: stable, top-down, with one fallibly allocated scratch buffer.
//! - **Heap sort**: see [`crate::heap`].
//! - **Quicksort**: delegates to the standard library's unstable sort.
//!
//! The main entry points are [`sort_by`] and [`sort`].

use crate::core::{Comparator, SortError, SortStats, Tracker};
use crate::heap;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The sorting strategies on offer, each selected by a single-character flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `b`
    Bubble,
    /// `q`, the standard library's unstable sort.
    Quick,
    /// `i`
    Insertion,
    /// `s`
    Selection,
    /// `m`
    Merge,
    /// `h`
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Heap,
    ];

    /// Maps a selection flag to its algorithm.
    ///
    /// ```
    /// use heapsort_kit::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_flag('h').unwrap(), Algorithm::Heap);
    /// assert!(Algorithm::from_flag('x').is_err());
    /// ```
    pub fn from_flag(flag: char) -> Result<Self, SortError> {
        match flag {
            'b' => Ok(Algorithm::Bubble),
            'q' => Ok(Algorithm::Quick),
            'i' => Ok(Algorithm::Insertion),
            's' => Ok(Algorithm::Selection),
            'm' => Ok(Algorithm::Merge),
            'h' => Ok(Algorithm::Heap),
            other => Err(SortError::UnknownAlgorithm(other)),
        }
    }

    pub fn flag(self) -> char {
        match self {
            Algorithm::Bubble => 'b',
            Algorithm::Quick => 'q',
            Algorithm::Insertion => 'i',
            Algorithm::Selection => 's',
            Algorithm::Merge => 'm',
            Algorithm::Heap => 'h',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubblesort",
            Algorithm::Quick => "quicksort",
            Algorithm::Insertion => "insertionsort",
            Algorithm::Selection => "selectionsort",
            Algorithm::Merge => "mergesort",
            Algorithm::Heap => "heapsort",
        }
    }

    /// Whether equal elements are guaranteed to keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses either a single selection flag (`"h"`) or a full name (`"heapsort"`).
///
/// Trailing characters are rejected. Use [`SortRequest`] for flags that carry
/// the quiet suffix.
///
/// ```
/// use heapsort_kit::Algorithm;
///
/// assert_eq!("m".parse::<Algorithm>().unwrap(), Algorithm::Merge);
/// assert_eq!("heapsort".parse::<Algorithm>().unwrap(), Algorithm::Heap);
/// assert!("hq".parse::<Algorithm>().is_err());
/// ```
impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SortError::MissingFlag),
            (Some(flag), None) => Algorithm::from_flag(flag),
            _ => Algorithm::ALL
                .into_iter()
                .find(|algorithm| algorithm.name() == s)
                .ok_or_else(|| SortError::UnknownName(s.to_string())),
        }
    }
}

/// A parsed selection flag: the algorithm, optionally followed by `q` for quiet mode.
///
/// In quiet mode the caller reports [`SortStats`] instead of the sorted records.
///
/// ```
/// use heapsort_kit::{Algorithm, SortRequest};
///
/// let request: SortRequest = "mq".parse().unwrap();
/// assert_eq!(request.algorithm, Algorithm::Merge);
/// assert!(request.quiet);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortRequest {
    pub algorithm: Algorithm,
    pub quiet: bool,
}

impl FromStr for SortRequest {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let algorithm = Algorithm::from_flag(chars.next().ok_or(SortError::MissingFlag)?)?;
        let quiet = chars.next() == Some('q');
        Ok(SortRequest { algorithm, quiet })
    }
}

/// Sorts `data` in ascending order under `cmp` with the selected algorithm.
///
/// The only failure is the merge scratch allocation, which is reported before
/// `data` is touched.
///
/// # Arguments
///
/// * `data` - The slice to sort in place.
/// * `algorithm` - Which strategy to run.
/// * `cmp` - The ordering, usually a closure `|a: &T, b: &T| -> Ordering`.
///
/// # Returns
///
/// The comparisons and swaps performed, or [`SortError::ScratchAlloc`] if merge
/// sort could not reserve its buffer.
///
/// # Examples
///
/// ```
/// use heapsort_kit::{Algorithm, sort_by};
///
/// let mut data = vec!["pear", "fig", "apple"];
/// let stats = sort_by(&mut data, Algorithm::Insertion, |a: &&str, b: &&str| a.cmp(b)).unwrap();
///
/// assert_eq!(data, vec!["apple", "fig", "pear"]);
/// assert_eq!(stats.swaps, 3);
/// ```
pub fn sort_by<T, C>(
    data: &mut [T],
    algorithm: Algorithm,
    cmp: C,
) -> Result<SortStats, SortError>
where
    T: Clone,
    C: Comparator<T>,
{
    let stats = match algorithm {
        Algorithm::Bubble => bubble_sort(data, cmp),
        Algorithm::Quick => quick_sort(data, cmp),
        Algorithm::Insertion => insertion_sort(data, cmp),
        Algorithm::Selection => selection_sort(data, cmp),
        Algorithm::Merge => merge_sort(data, cmp)?,
        Algorithm::Heap => heap::heap_sort(data, cmp),
    };

    tracing::debug!(
        %algorithm,
        len = data.len(),
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "sort finished"
    );

    Ok(stats)
}

/// Sorts `data` by its natural order with the selected algorithm.
///
/// ```
/// use heapsort_kit::{Algorithm, sort};
///
/// for algorithm in Algorithm::ALL {
///     let mut data = [11, 9, 18, 15, 7, 5, 3, 22, 4];
///     sort(&mut data, algorithm).unwrap();
///     assert_eq!(data, [3, 4, 5, 7, 9, 11, 15, 18, 22]);
/// }
/// ```
pub fn sort<T>(data: &mut [T], algorithm: Algorithm) -> Result<SortStats, SortError>
where
    T: Ord + Clone,
{
    sort_by(data, algorithm, T::cmp)
}

/// Bubble sort.
///
/// A swap at position `c > 0` means the element now at `c` may still belong further
/// left, so the next pass starts at `c - 1` of the earliest such swap. Each pass
/// also settles the largest remaining element at the end.
pub fn bubble_sort<T, C: Comparator<T>>(data: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    let len = data.len();

    let mut rerun = true;
    let mut settled = 0;
    let mut start = 0;

    while rerun {
        rerun = false;
        let end = len.saturating_sub(settled);

        let mut c = start;
        while c + 1 < end {
            if tracker.compare_at(data, c, c + 1) == Ordering::Greater {
                tracker.swap(data, c, c + 1);
                // A swap of the first pair alone leaves nothing to redo.
                if c > 0 {
                    if !rerun {
                        start = c - 1;
                    }
                    rerun = true;
                }
            }
            c += 1;
        }

        settled += 1;
    }

    tracker.stats()
}

/// Insertion sort. Stable.
pub fn insertion_sort<T, C: Comparator<T>>(data: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);

    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && tracker.compare_at(data, j - 1, j) == Ordering::Greater {
            tracker.swap(data, j - 1, j);
            j -= 1;
        }
    }

    tracker.stats()
}

/// Selection sort. Ties keep the earliest candidate, and a position already
/// holding its minimum is not swapped.
pub fn selection_sort<T, C: Comparator<T>>(data: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    let len = data.len();

    for idx in 0..len.saturating_sub(1) {
        let smallest = find_smallest(data, idx, &mut tracker);
        if smallest != idx {
            tracker.swap(data, idx, smallest);
        }
    }

    tracker.stats()
}

fn find_smallest<T, C: Comparator<T>>(
    data: &[T],
    from: usize,
    tracker: &mut Tracker<C>,
) -> usize {
    (from + 1..data.len()).fold(from, |smallest, idx| {
        if tracker.compare_at(data, idx, smallest) == Ordering::Less {
            idx
        } else {
            smallest
        }
    })
}

/// Top-down merge sort. Stable.
///
/// The left run takes the extra element of an odd split. One scratch buffer of
/// `data.len()` elements is reserved up front and shared by every merge, so the
/// only failure happens before any element moves.
pub fn merge_sort<T, C>(data: &mut [T], cmp: C) -> Result<SortStats, SortError>
where
    T: Clone,
    C: Comparator<T>,
{
    let len = data.len();
    let mut scratch: Vec<T> = Vec::new();
    if let Err(source) = scratch.try_reserve_exact(len) {
        tracing::warn!(len, error = %source, "merge scratch reservation failed");
        return Err(SortError::ScratchAlloc { len, source });
    }

    let mut tracker = Tracker::new(cmp);
    merge_sort_rec(data, &mut scratch, &mut tracker);
    Ok(tracker.stats())
}

fn merge_sort_rec<T, C>(data: &mut [T], scratch: &mut Vec<T>, tracker: &mut Tracker<C>)
where
    T: Clone,
    C: Comparator<T>,
{
    let len = data.len();
    let mid = len - len / 2;

    if len > 2 {
        let (a, b) = data.split_at_mut(mid);
        merge_sort_rec(a, scratch, tracker);
        merge_sort_rec(b, scratch, tracker);
    }

    merge(data, mid, scratch, tracker);
}

/// Merges the sorted runs `data[..mid]` and `data[mid..]`. Ties take the left run.
fn merge<T, C>(data: &mut [T], mid: usize, scratch: &mut Vec<T>, tracker: &mut Tracker<C>)
where
    T: Clone,
    C: Comparator<T>,
{
    let (a, b) = data.split_at(mid);
    if a.is_empty() || b.is_empty() {
        return;
    }

    // Capacity was reserved for the whole slice, so these pushes never reallocate.
    scratch.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if tracker.compare(&a[i], &b[j]) == Ordering::Greater {
            scratch.push(b[j].clone());
            j += 1;
        } else {
            scratch.push(a[i].clone());
            i += 1;
        }
    }
    scratch.extend_from_slice(&a[i..]);
    scratch.extend_from_slice(&b[j..]);

    data.clone_from_slice(scratch);
}

/// Delegates to the standard library's pattern-defeating quicksort.
///
/// Comparisons are counted. Element moves happen inside the library and are
/// not visible, so `swaps` stays zero.
pub fn quick_sort<T, C: Comparator<T>>(data: &mut [T], cmp: C) -> SortStats {
    let mut tracker = Tracker::new(cmp);
    data.sort_unstable_by(|a, b| tracker.compare(a, b));
    tracker.stats()
}
